mod entities;

pub use entities::{ExperiencePayload, ExperienceRecord};

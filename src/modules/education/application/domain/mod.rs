mod entities;

pub use entities::{EducationPayload, EducationRecord};

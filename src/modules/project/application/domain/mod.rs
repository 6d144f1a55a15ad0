mod entities;

pub use entities::{ProjectPayload, ProjectRecord};

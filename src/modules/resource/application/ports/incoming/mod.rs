mod manage_resource;

pub use manage_resource::{ManageResource, ResourceError};

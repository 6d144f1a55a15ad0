pub mod openapi;
pub mod schemas;

pub use openapi::{openapi_json, ApiDoc};

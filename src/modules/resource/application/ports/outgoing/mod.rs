mod resource_store;

pub use resource_store::{ResourceStore, StoreError};

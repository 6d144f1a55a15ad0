mod in_memory_store;
pub mod sea_orm_support;

pub use in_memory_store::InMemoryStore;

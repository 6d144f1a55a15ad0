pub mod sea_orm_entity;
mod project_store_postgres;

pub use project_store_postgres::ProjectStorePostgres;

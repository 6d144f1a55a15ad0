pub mod sea_orm_entity;
mod experience_store_postgres;

pub use experience_store_postgres::ExperienceStorePostgres;

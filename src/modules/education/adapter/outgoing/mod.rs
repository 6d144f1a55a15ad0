pub mod sea_orm_entity;
mod education_store_postgres;

pub use education_store_postgres::EducationStorePostgres;

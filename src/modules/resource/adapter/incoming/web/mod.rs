mod routes;

pub use routes::mount;

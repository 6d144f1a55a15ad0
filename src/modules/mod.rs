pub mod education;
pub mod experience;
pub mod project;
pub mod resource;
pub mod skill;

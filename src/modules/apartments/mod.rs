// Apartments module

pub mod controllers;
pub mod models;
pub mod repositories;

pub use controllers::configure;
pub use models::Apartment;
pub use repositories::MySqlApartmentRepository;

// Agreements module

pub mod controllers;
pub mod models;
pub mod repositories;

pub use controllers::configure;
pub use models::Agreement;
pub use repositories::MySqlAgreementRepository;

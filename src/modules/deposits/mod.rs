// Deposits module

pub mod controllers;
pub mod models;
pub mod repositories;

pub use controllers::configure;
pub use models::Deposit;
pub use repositories::MySqlDepositRepository;

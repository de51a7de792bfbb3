pub mod deposit_controller;

pub use deposit_controller::configure;

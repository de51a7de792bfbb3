pub mod apartment_controller;

pub use apartment_controller::configure;

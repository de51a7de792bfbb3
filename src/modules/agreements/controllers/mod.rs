pub mod agreement_controller;

pub use agreement_controller::configure;

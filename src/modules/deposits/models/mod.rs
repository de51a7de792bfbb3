mod deposit;

pub use deposit::Deposit;

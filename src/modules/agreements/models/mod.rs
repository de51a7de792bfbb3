mod agreement;

pub use agreement::Agreement;

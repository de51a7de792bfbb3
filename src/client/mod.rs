// Client-side counterpart of the REST surface: a typed HTTP service per
// resource collection and the update-form save model built on it.

pub mod form;
pub mod service;

pub use form::UpdateForm;
pub use service::{EntityService, HttpEntityService};

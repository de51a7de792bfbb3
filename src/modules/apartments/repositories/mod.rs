mod apartment_repository;

pub use apartment_repository::MySqlApartmentRepository;

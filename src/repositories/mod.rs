// Repositories module - data access layer

pub mod catalog_repository;

pub use catalog_repository::{CatalogRepository, InMemoryCatalogRepository};

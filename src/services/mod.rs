// Services module - business logic layer

pub mod catalog_service;

pub use catalog_service::CatalogService;

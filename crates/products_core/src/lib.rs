//! Core domain logic for the product catalogue.
//!
//! `ProductService` orchestrates a `ProductRepository` (SQLite or in-memory)
//! and an `IdService` (random UUIDs) behind a small CRUD API.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, CoreConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::product::{NewProduct, Product, ProductId, ProductValidationError};
pub use repo::memory::InMemoryProductRepository;
pub use repo::product_repo::{ProductRepository, RepoError, RepoResult, SqliteProductRepository};
pub use service::id_service::{IdService, UuidIdService};
pub use service::product_service::{ProductService, ProductServiceError, ServiceResult};

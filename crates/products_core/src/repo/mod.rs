//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the product persistence contract consumed by the service layer.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `Product::validate()` before persistence.
//! - Absence is reported as `Ok(None)`, never as an error.

pub mod memory;
pub mod product_repo;

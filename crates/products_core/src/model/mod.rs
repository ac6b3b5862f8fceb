//! Domain model for the product catalogue.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Separate persisted identity (`Product`) from creation payloads
//!   (`NewProduct`).
//!
//! # Invariants
//! - Every persisted product carries a non-empty `ProductId`.
//! - Updates replace a product wholesale; there are no partial patches.

pub mod product;

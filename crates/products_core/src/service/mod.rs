//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository and id-generation calls into use-case level APIs.
//! - Keep callers decoupled from storage details.

pub mod id_service;
pub mod product_service;

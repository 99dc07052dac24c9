//! Customer use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the five customer operations.
//! - Keep HTTP callers decoupled from storage details.

pub mod customer_service;

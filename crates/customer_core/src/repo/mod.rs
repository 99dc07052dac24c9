//! Persistence gateway for the customer table.
//!
//! # Responsibility
//! - Define the CRUD contract the service layer depends on.
//! - Keep SQLite query details out of service and HTTP code.
//!
//! # Invariants
//! - Repository reads reject malformed persisted rows instead of masking them.
//! - Repositories never retry or cache; every call hits the store.

pub mod customer_repo;

//! Domain model for the customer resource.
//!
//! # Responsibility
//! - Define the persisted customer record and its transient request shape.
//! - Keep request-to-entity mapping explicit and field-by-field.
//!
//! # Invariants
//! - Every persisted customer is identified by a store-assigned `CustomerId`.
//! - Deletion is a hard delete; ids are never reused afterwards.

pub mod customer;

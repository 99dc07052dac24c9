//! Customer domain model.
//!
//! # Responsibility
//! - Define the canonical customer record shared by storage and HTTP layers.
//! - Map `NewCustomerRequest` input onto new or existing records.
//!
//! # Invariants
//! - `id` is `None` until the store assigns one, and immutable afterwards.
//! - `name`, `email` and `age` are pass-through values; absence stays `None`.

use serde::{Deserialize, Serialize};

/// Store-assigned identifier of a customer row.
pub type CustomerId = i64;

/// Canonical persisted customer record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// `None` for records that have not been saved yet.
    pub id: Option<CustomerId>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
}

/// Transient request body for create and update calls.
///
/// Every field is optional and unvalidated; missing JSON keys decode to `None`
/// and unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomerRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
}

impl Customer {
    /// Builds an unsaved customer from request fields.
    pub fn from_request(request: &NewCustomerRequest) -> Self {
        Self {
            id: None,
            name: request.name.clone(),
            email: request.email.clone(),
            age: request.age,
        }
    }

    /// Overwrites `name`, `email` and `age` in place, keeping `id`.
    pub fn apply_request(&mut self, request: &NewCustomerRequest) {
        self.name = request.name.clone();
        self.email = request.email.clone();
        self.age = request.age;
    }
}

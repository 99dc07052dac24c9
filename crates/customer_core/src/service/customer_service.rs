//! Customer use-case service.
//!
//! # Responsibility
//! - Provide list/get/add/update/delete entry points for HTTP callers.
//! - Map `NewCustomerRequest` onto entities before persistence.
//!
//! # Invariants
//! - Update never creates a row; an absent id yields `RepoError::NotFound`
//!   and leaves the store unchanged.
//! - Service layer remains storage-agnostic.

use crate::model::customer::{Customer, CustomerId, NewCustomerRequest};
use crate::repo::customer_repo::{CustomerRepository, RepoError, RepoResult};
use log::{info, warn};

/// Use-case service wrapper for customer CRUD operations.
pub struct CustomerService<R: CustomerRepository> {
    repo: R,
}

impl<R: CustomerRepository> CustomerService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists every stored customer.
    pub fn list_customers(&self) -> RepoResult<Vec<Customer>> {
        self.repo.find_all()
    }

    /// Gets one customer, failing with `NotFound` when the id is absent.
    pub fn get_customer(&self, id: CustomerId) -> RepoResult<Customer> {
        self.repo.find_by_id(id)?.ok_or(RepoError::NotFound(id))
    }

    /// Creates a customer from request fields and returns it with its new id.
    pub fn add_customer(&self, request: &NewCustomerRequest) -> RepoResult<Customer> {
        let saved = self.repo.save(&Customer::from_request(request))?;
        info!(
            "event=customer_create module=service status=ok customer_id={}",
            saved.id.unwrap_or_default()
        );
        Ok(saved)
    }

    /// Overwrites name, email and age of an existing customer.
    ///
    /// # Errors
    /// - `RepoError::NotFound` when no customer has `id`.
    pub fn update_customer_details(
        &self,
        id: CustomerId,
        request: &NewCustomerRequest,
    ) -> RepoResult<Customer> {
        let Some(mut existing) = self.repo.find_by_id(id)? else {
            warn!("event=customer_update module=service status=not_found customer_id={id}");
            return Err(RepoError::NotFound(id));
        };

        existing.apply_request(request);
        let saved = self.repo.save(&existing)?;
        info!("event=customer_update module=service status=ok customer_id={id}");
        Ok(saved)
    }

    /// Deletes a customer; deleting an absent id is a no-op.
    pub fn delete_customer_by_id(&self, id: CustomerId) -> RepoResult<()> {
        self.repo.delete_by_id(id)?;
        info!("event=customer_delete module=service status=ok customer_id={id}");
        Ok(())
    }
}

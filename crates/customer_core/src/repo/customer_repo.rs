//! Customer repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide `find_all`/`find_by_id`/`save`/`delete_by_id` over `customers`.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `save` on an unsaved customer always yields a fresh store-assigned id.
//! - `delete_by_id` is idempotent; an absent id is not an error.

use crate::db::DbError;
use crate::model::customer::{Customer, CustomerId};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const CUSTOMER_SELECT_SQL: &str = "SELECT id, name, email, age FROM customers";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for customer persistence and lookup.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(CustomerId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "customer not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted customer data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Generic CRUD contract over customers keyed by integer id.
pub trait CustomerRepository {
    /// Returns every customer, ordered by id.
    fn find_all(&self) -> RepoResult<Vec<Customer>>;
    fn find_by_id(&self, id: CustomerId) -> RepoResult<Option<Customer>>;
    /// Inserts when `customer.id` is `None`, otherwise overwrites that row.
    fn save(&self, customer: &Customer) -> RepoResult<Customer>;
    fn delete_by_id(&self, id: CustomerId) -> RepoResult<()>;
}

/// SQLite-backed customer repository.
pub struct SqliteCustomerRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCustomerRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CustomerRepository for SqliteCustomerRepository<'_> {
    fn find_all(&self) -> RepoResult<Vec<Customer>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CUSTOMER_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut customers = Vec::new();

        while let Some(row) = rows.next()? {
            customers.push(parse_customer_row(row)?);
        }

        Ok(customers)
    }

    fn find_by_id(&self, id: CustomerId) -> RepoResult<Option<Customer>> {
        let customer = self
            .conn
            .query_row(
                &format!("{CUSTOMER_SELECT_SQL} WHERE id = ?1;"),
                [id],
                |row| Ok(parse_customer_row(row)),
            )
            .optional()?;

        customer.transpose()
    }

    fn save(&self, customer: &Customer) -> RepoResult<Customer> {
        let id = match customer.id {
            None => {
                self.conn.execute(
                    "INSERT INTO customers (name, email, age) VALUES (?1, ?2, ?3);",
                    params![
                        customer.name.as_deref(),
                        customer.email.as_deref(),
                        customer.age
                    ],
                )?;
                self.conn.last_insert_rowid()
            }
            Some(id) => {
                // Upsert: an id unknown to the store is inserted as-is.
                self.conn.execute(
                    "INSERT INTO customers (id, name, email, age) VALUES (?1, ?2, ?3, ?4)
                     ON CONFLICT(id) DO UPDATE SET
                        name = excluded.name,
                        email = excluded.email,
                        age = excluded.age;",
                    params![
                        id,
                        customer.name.as_deref(),
                        customer.email.as_deref(),
                        customer.age
                    ],
                )?;
                id
            }
        };

        Ok(Customer {
            id: Some(id),
            ..customer.clone()
        })
    }

    fn delete_by_id(&self, id: CustomerId) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM customers WHERE id = ?1;", [id])?;
        Ok(())
    }
}

fn parse_customer_row(row: &Row<'_>) -> RepoResult<Customer> {
    let id: CustomerId = row.get("id")?;
    let age = match row.get::<_, Option<i64>>("age")? {
        Some(value) => Some(i32::try_from(value).map_err(|_| {
            RepoError::InvalidData(format!(
                "age `{value}` out of range in customers.age for id {id}"
            ))
        })?),
        None => None,
    };

    Ok(Customer {
        id: Some(id),
        name: row.get("name")?,
        email: row.get("email")?,
        age,
    })
}

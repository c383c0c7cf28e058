//! The interface to the store that holds employees' bills.

use async_trait::async_trait;

use crate::bill::{BillRecord, NewBill};

/// An error from the bill store.
///
/// The message is meant for the user and is displayed without modification,
/// e.g. "Erreur 404".
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("{message}")]
pub struct StoreError {
    message: String,
}

impl StoreError {
    /// Create an error with a user-facing `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The requested bills could not be found.
    pub fn not_found() -> Self {
        Self::new("Erreur 404")
    }

    /// The store failed in a way the user cannot fix.
    pub fn internal() -> Self {
        Self::new("Erreur 500")
    }

    /// The message to show the user.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A source of bills.
///
/// Only [BillStore::list] is used by the bills page. [BillStore::create] and
/// [BillStore::update] are used by the bill form and the admin dashboard.
#[async_trait]
pub trait BillStore: Send + Sync {
    /// Get the bills submitted by the employee with the email `email`, in the
    /// order the store keeps them.
    async fn list(&self, email: &str) -> Result<Vec<BillRecord>, StoreError>;

    /// Save `bill` and return the stored record.
    async fn create(&self, bill: NewBill) -> Result<BillRecord, StoreError>;

    /// Replace the stored bill with the same ID as `bill`.
    async fn update(&self, bill: BillRecord) -> Result<BillRecord, StoreError>;
}

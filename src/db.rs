//! Database setup for the SQLite bill store.

use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::bill::create_bill_table;

/// Create the tables the app needs if they do not already exist.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), rusqlite::Error> {
    let transaction = Transaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_bill_table(&transaction)?;

    transaction.commit()
}

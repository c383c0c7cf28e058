//! SQLite implementation of the bill store.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use rusqlite::{Connection, Row};

use crate::bill::{BillRecord, BillStore, NewBill, StoreError};

/// A [BillStore] backed by a shared SQLite connection.
#[derive(Debug, Clone)]
pub struct SQLiteBillStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteBillStore {
    /// Create a store that uses `connection`.
    ///
    /// The bill table must already exist, see [create_bill_table].
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.connection.lock().map_err(|error| {
            tracing::error!("could not acquire database lock: {error}");
            StoreError::internal()
        })
    }
}

#[async_trait]
impl BillStore for SQLiteBillStore {
    async fn list(&self, email: &str) -> Result<Vec<BillRecord>, StoreError> {
        let connection = self.lock()?;

        get_bills_by_email(email, &connection).map_err(map_sql_error)
    }

    async fn create(&self, bill: NewBill) -> Result<BillRecord, StoreError> {
        let connection = self.lock()?;

        create_bill(bill, &connection).map_err(map_sql_error)
    }

    async fn update(&self, bill: BillRecord) -> Result<BillRecord, StoreError> {
        let connection = self.lock()?;

        update_bill(&bill, &connection).map_err(map_sql_error)?;

        Ok(bill)
    }
}

fn map_sql_error(error: rusqlite::Error) -> StoreError {
    match error {
        rusqlite::Error::QueryReturnedNoRows => StoreError::not_found(),
        error => {
            tracing::error!("an unhandled SQL error occurred: {error}");
            StoreError::internal()
        }
    }
}

/// Initialize the bill table and indexes.
pub fn create_bill_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS bill (
            id TEXT PRIMARY KEY,
            email TEXT NOT NULL,
            type TEXT NOT NULL,
            name TEXT NOT NULL,
            amount REAL NOT NULL,
            date TEXT NOT NULL,
            status TEXT NOT NULL,
            commentary TEXT,
            file_url TEXT,
            file_name TEXT,
            vat TEXT,
            pct INTEGER,
            comment_admin TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_bill_email ON bill(email);",
    )?;

    Ok(())
}

/// Insert a bill with a generated ID and return the stored record.
pub fn create_bill(bill: NewBill, connection: &Connection) -> Result<BillRecord, rusqlite::Error> {
    connection
        .prepare(
            "INSERT INTO bill
                (id, email, type, name, amount, date, status, commentary, file_url, file_name, vat, pct)
            VALUES
                (lower(hex(randomblob(10))), ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            RETURNING
                id, email, type, name, amount, date, status, commentary, file_url, file_name, vat, pct, comment_admin;",
        )?
        .query_row(
            rusqlite::params![
                bill.email,
                bill.bill_type,
                bill.name,
                bill.amount,
                bill.date,
                bill.status,
                bill.commentary,
                bill.file_url,
                bill.file_name,
                bill.vat,
                bill.pct,
            ],
            map_row,
        )
}

/// Retrieve the bills for `email` in insertion order.
pub fn get_bills_by_email(
    email: &str,
    connection: &Connection,
) -> Result<Vec<BillRecord>, rusqlite::Error> {
    connection
        .prepare(
            "SELECT id, email, type, name, amount, date, status, commentary, file_url, file_name, vat, pct, comment_admin
            FROM bill
            WHERE email = :email
            ORDER BY rowid ASC;",
        )?
        .query_map(&[(":email", email)], map_row)?
        .collect()
}

/// Overwrite the stored bill that has the same ID as `bill`.
///
/// Returns [rusqlite::Error::QueryReturnedNoRows] if there is no such bill.
pub fn update_bill(bill: &BillRecord, connection: &Connection) -> Result<(), rusqlite::Error> {
    let rows_affected = connection.execute(
        "UPDATE bill SET
            email = ?1, type = ?2, name = ?3, amount = ?4, date = ?5, status = ?6,
            commentary = ?7, file_url = ?8, file_name = ?9, vat = ?10, pct = ?11,
            comment_admin = ?12
        WHERE id = ?13",
        rusqlite::params![
            bill.email,
            bill.bill_type,
            bill.name,
            bill.amount,
            bill.date,
            bill.status,
            bill.commentary,
            bill.file_url,
            bill.file_name,
            bill.vat,
            bill.pct,
            bill.comment_admin,
            bill.id,
        ],
    )?;

    if rows_affected == 0 {
        return Err(rusqlite::Error::QueryReturnedNoRows);
    }

    Ok(())
}

fn map_row(row: &Row) -> Result<BillRecord, rusqlite::Error> {
    Ok(BillRecord {
        id: row.get(0)?,
        email: row.get(1)?,
        bill_type: row.get(2)?,
        name: row.get(3)?,
        amount: row.get(4)?,
        date: row.get(5)?,
        status: row.get(6)?,
        commentary: row.get(7)?,
        file_url: row.get(8)?,
        file_name: row.get(9)?,
        vat: row.get(10)?,
        pct: row.get(11)?,
        comment_admin: row.get(12)?,
    })
}

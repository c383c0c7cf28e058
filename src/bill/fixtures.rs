//! Bills and an in-memory store for tests.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;

use crate::bill::{BillRecord, BillStore, NewBill, StoreError};

pub(crate) fn bill(id: &str, date: &str, status: &str) -> BillRecord {
    BillRecord {
        id: id.to_owned(),
        email: "a@a".to_owned(),
        bill_type: "Hôtel et logement".to_owned(),
        name: format!("bill {id}"),
        amount: 400.0,
        date: date.to_owned(),
        status: status.to_owned(),
        commentary: Some("séminaire billed".to_owned()),
        file_url: Some(format!("https://test.storage.tld/receipts/{id}.jpg")),
        file_name: Some(format!("{id}.jpg")),
        vat: Some("80".to_owned()),
        pct: Some(20),
        comment_admin: None,
    }
}

/// The bills seeded into the demo store, in store order.
pub(crate) fn fixture_bills() -> Vec<BillRecord> {
    vec![
        bill("47qAXb6fIm2zOKkLzMro", "2004-04-04", "pending"),
        bill("BeKy5Mo4jkmdfPGYpTxZ", "2001-01-01", "refused"),
        bill("UIUZtnPQvnbFnB0ozvJh", "2003-03-03", "accepted"),
        bill("qcCK3SzECmaZAGRrHjaC", "2002-02-02", "refused"),
    ]
}

/// A [BillStore] that returns fixed bills, or fails every call with a fixed
/// error.
pub(crate) struct FakeBillStore {
    bills: Vec<BillRecord>,
    error: Option<StoreError>,
    list_calls: AtomicUsize,
}

impl FakeBillStore {
    pub(crate) fn with_bills(bills: Vec<BillRecord>) -> Arc<Self> {
        Arc::new(Self {
            bills,
            error: None,
            list_calls: AtomicUsize::new(0),
        })
    }

    pub(crate) fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            bills: vec![],
            error: Some(StoreError::new(message)),
            list_calls: AtomicUsize::new(0),
        })
    }

    pub(crate) fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), StoreError> {
        match &self.error {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl BillStore for FakeBillStore {
    async fn list(&self, _email: &str) -> Result<Vec<BillRecord>, StoreError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;

        Ok(self.bills.clone())
    }

    async fn create(&self, bill: NewBill) -> Result<BillRecord, StoreError> {
        self.check()?;

        Ok(BillRecord {
            id: "new".to_owned(),
            email: bill.email,
            bill_type: bill.bill_type,
            name: bill.name,
            amount: bill.amount,
            date: bill.date,
            status: bill.status,
            commentary: bill.commentary,
            file_url: bill.file_url,
            file_name: bill.file_name,
            vat: bill.vat,
            pct: bill.pct,
            comment_admin: None,
        })
    }

    async fn update(&self, bill: BillRecord) -> Result<BillRecord, StoreError> {
        self.check()?;

        Ok(bill)
    }
}

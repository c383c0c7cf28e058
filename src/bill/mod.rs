//! The bills page: an employee's submitted expense bills, newest first.

mod best_effort;
mod container;
mod db;
mod domain;
mod format;
mod page;
mod store;
mod view;

#[cfg(test)]
mod fixtures;

pub use best_effort::best_effort_map;
pub use container::{Bills, EventBinding, EventBindings, OnNavigate, sort_bills_by_date};
pub use db::{SQLiteBillStore, create_bill, create_bill_table};
pub use domain::{BillId, BillRecord, DisplayBill, NewBill};
pub use format::{
    DateFormatError, format_date, format_status, parse_bill_date, parse_bill_instant,
};
pub use page::{
    BillsPageState, get_bills_page, get_new_bill_click, get_new_bill_page, get_receipt_modal,
    hx_navigate,
};
pub use store::{BillStore, StoreError};

#[cfg(test)]
pub(crate) use fixtures::{FakeBillStore, fixture_bills};

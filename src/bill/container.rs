//! The logic behind the bills page: fetching, sorting and formatting bills, and
//! the handlers for the page's controls.

use std::{cmp::Reverse, sync::Arc};

use axum::response::Response;
use maud::Markup;

use crate::{
    bill::{
        BillRecord, BillStore, DisplayBill, StoreError,
        best_effort::best_effort_map,
        format::{format_date, format_status, parse_bill_instant},
        view::receipt_modal,
    },
    endpoints,
    session::Session,
};

/// Callback that moves the user to another page and returns the response that
/// does so.
pub type OnNavigate = Arc<dyn Fn(&str) -> Response + Send + Sync>;

/// A control on the bills page and the request it should make when clicked.
///
/// The rendering layer binds these to the elements with the matching
/// `data-testid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventBinding {
    /// The `data-testid` of the element(s) to bind.
    pub test_id: &'static str,
    /// The endpoint to `GET` on click.
    pub endpoint: &'static str,
    /// The CSS selector of the element the response is swapped into, if any.
    pub target: Option<&'static str>,
}

/// The controls the bills page exposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventBindings {
    /// The eye icon on each row, which opens the receipt preview.
    pub icon_eye: EventBinding,
    /// The button that takes the user to the new bill form.
    pub new_bill: EventBinding,
}

/// The ID of the element the receipt modal is rendered into.
pub const MODAL_CONTAINER_ID: &str = "modal-container";

/// The bills page for one signed-in user.
pub struct Bills {
    store: Option<Arc<dyn BillStore>>,
    session: Session,
    on_navigate: OnNavigate,
}

impl Bills {
    /// Create the bills page logic for `session`.
    ///
    /// When `store` is `None` the page has no bills to show.
    pub fn new(
        store: Option<Arc<dyn BillStore>>,
        session: Session,
        on_navigate: OnNavigate,
    ) -> Self {
        Self {
            store,
            session,
            on_navigate,
        }
    }

    /// Fetch the user's bills, newest first, ready for display.
    ///
    /// A bill whose date cannot be formatted keeps its raw date, it is never
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the bills could not be fetched. Its message
    /// is meant to be shown to the user as is.
    pub async fn get_bills(&self) -> Result<Vec<DisplayBill>, StoreError> {
        let Some(store) = &self.store else {
            tracing::debug!("No bill store configured, showing no bills.");
            return Ok(vec![]);
        };

        let mut records = store.list(&self.session.email).await?;
        tracing::debug!(
            "Fetched {} bills for {}",
            records.len(),
            self.session.email
        );

        sort_bills_by_date(&mut records);

        Ok(format_bills(records))
    }

    /// Render the receipt preview for the bill with the receipt at `file_url`.
    pub fn handle_click_icon_eye(&self, file_url: Option<&str>) -> Markup {
        receipt_modal(file_url)
    }

    /// Go to the new bill form.
    pub fn handle_click_new_bill(&self) -> Response {
        (self.on_navigate)(endpoints::NEW_BILL_VIEW)
    }

    /// The controls the rendering layer should bind on the bills page.
    pub fn event_bindings() -> EventBindings {
        EventBindings {
            icon_eye: EventBinding {
                test_id: "icon-eye",
                endpoint: endpoints::RECEIPT_MODAL,
                target: Some("#modal-container"),
            },
            new_bill: EventBinding {
                test_id: "btn-new-bill",
                endpoint: endpoints::NEW_BILL_CLICK,
                target: None,
            },
        }
    }
}

/// Sort `records` by date, newest first.
///
/// Date-times are compared as instants, so their time and offset count.
/// Records whose date cannot be parsed go last. Records with equal dates keep
/// their relative order.
pub fn sort_bills_by_date(records: &mut [BillRecord]) {
    records.sort_by_cached_key(|record| Reverse(parse_bill_instant(&record.date)));
}

fn format_bills(records: Vec<BillRecord>) -> Vec<DisplayBill> {
    let dates = best_effort_map(
        &records,
        |record| format_date(&record.date),
        |record| record.date.clone(),
    );

    records
        .into_iter()
        .zip(dates)
        .map(|(record, date)| {
            let status = format_status(&record.status);
            DisplayBill::from_record(record, date, status)
        })
        .collect()
}


#[cfg(test)]
mod handler_tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use axum::{
        http::StatusCode,
        response::{IntoResponse, Response},
    };
    use scraper::{Html, Selector};

    use crate::{
        bill::{Bills, container::OnNavigate},
        endpoints,
        session::Session,
    };

    #[test]
    fn new_bill_navigates_once_per_click() {
        let calls = Arc::new(AtomicUsize::new(0));
        let paths = Arc::new(std::sync::Mutex::new(Vec::new()));
        let on_navigate: OnNavigate = {
            let calls = calls.clone();
            let paths = paths.clone();
            Arc::new(move |path: &str| -> Response {
                calls.fetch_add(1, Ordering::SeqCst);
                paths.lock().unwrap().push(path.to_owned());
                StatusCode::OK.into_response()
            })
        };
        let bills = Bills::new(None, Session::employee("a@a"), on_navigate);

        bills.handle_click_new_bill();
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        bills.handle_click_new_bill();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(
            *paths.lock().unwrap(),
            vec![endpoints::NEW_BILL_VIEW, endpoints::NEW_BILL_VIEW]
        );
    }

    #[test]
    fn icon_eye_shows_modal_with_receipt() {
        let bills = Bills::new(
            None,
            Session::employee("a@a"),
            Arc::new(|_: &str| StatusCode::OK.into_response()),
        );
        let url = "https://test.storage.tld/receipts/1.jpg";

        let html = Html::parse_fragment(&bills.handle_click_icon_eye(Some(url)).into_string());

        let modal = html
            .select(&Selector::parse(".modal").unwrap())
            .next()
            .expect("No modal found");
        let image = modal
            .select(&Selector::parse("img").unwrap())
            .next()
            .expect("No receipt image found");
        assert_eq!(image.value().attr("src"), Some(url));
    }

    #[test]
    fn bindings_target_controls_on_page() {
        let bindings = Bills::event_bindings();

        assert_eq!(bindings.icon_eye.test_id, "icon-eye");
        assert_eq!(bindings.icon_eye.endpoint, endpoints::RECEIPT_MODAL);
        assert_eq!(bindings.new_bill.test_id, "btn-new-bill");
        assert_eq!(bindings.new_bill.endpoint, endpoints::NEW_BILL_CLICK);
    }
}

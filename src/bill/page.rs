//! Route handlers for the bills page, its controls and the new bill page.

use std::sync::Arc;

use axum::{
    extract::{FromRef, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;
use maud::Markup;
use serde::Deserialize;

use crate::{
    AppState,
    bill::{
        BillStore, Bills,
        container::OnNavigate,
        view::{BillsContent, bills_view, new_bill_view},
    },
    endpoints,
    navigation::VerticalLayout,
    session::Session,
};

/// The state needed for the bills page and its controls.
#[derive(Clone)]
pub struct BillsPageState {
    pub bill_store: Option<Arc<dyn BillStore>>,
    pub on_navigate: OnNavigate,
}

impl FromRef<AppState> for BillsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            bill_store: state.bill_store.clone(),
            on_navigate: Arc::new(hx_navigate),
        }
    }
}

impl BillsPageState {
    fn bills(self, session: Session) -> Bills {
        Bills::new(self.bill_store, session, self.on_navigate)
    }
}

/// Navigate an HTMX request to `path`.
pub fn hx_navigate(path: &str) -> Response {
    (HxRedirect(path.to_owned()), StatusCode::SEE_OTHER).into_response()
}

/// Render the bills page for the signed-in user.
///
/// If the bills cannot be fetched, the page shows the store's error message in
/// place of the bills.
pub async fn get_bills_page(State(state): State<BillsPageState>, session: Session) -> Response {
    let layout = VerticalLayout::new(endpoints::BILLS_VIEW, &session);
    let bills = state.bills(session);

    match bills.get_bills().await {
        Ok(display_bills) => {
            let bindings = Bills::event_bindings();
            let content = BillsContent::Data {
                bills: &display_bills,
                bindings: &bindings,
            };

            bills_view(&content, layout).into_response()
        }
        Err(error) => {
            tracing::error!("Could not fetch bills: {error}");

            bills_view(&BillsContent::Error(error.message()), layout).into_response()
        }
    }
}

/// The query for the receipt modal.
#[derive(Debug, Deserialize)]
pub struct ReceiptQuery {
    pub url: Option<String>,
}

/// Render the receipt preview modal for the eye icon that was clicked.
pub async fn get_receipt_modal(
    State(state): State<BillsPageState>,
    session: Session,
    Query(query): Query<ReceiptQuery>,
) -> Markup {
    state
        .bills(session)
        .handle_click_icon_eye(query.url.as_deref())
}

/// Handle a click on the "new bill" button.
pub async fn get_new_bill_click(State(state): State<BillsPageState>, session: Session) -> Response {
    state.bills(session).handle_click_new_bill()
}

/// Render the new bill page.
pub async fn get_new_bill_page(session: Session) -> Response {
    new_bill_view(VerticalLayout::new(endpoints::NEW_BILL_VIEW, &session)).into_response()
}

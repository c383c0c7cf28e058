//! Application router configuration.

use axum::{Router, response::Redirect, routing::get};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    bill::{get_bills_page, get_new_bill_click, get_new_bill_page, get_receipt_modal},
    endpoints,
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
///
/// Every page except the error pages needs a session cookie and responds with
/// 401 Unauthorized without one.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::BILLS_VIEW, get(get_bills_page))
        .route(endpoints::NEW_BILL_VIEW, get(get_new_bill_page))
        .route(endpoints::RECEIPT_MODAL, get(get_receipt_modal))
        .route(endpoints::NEW_BILL_CLICK, get(get_new_bill_click))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the bills page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::BILLS_VIEW)
}

#[cfg(test)]
mod root_route_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{endpoints, routing::get_index_page};

    #[tokio::test]
    async fn root_redirects_to_bills() {
        let response = get_index_page().await.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let location = response.headers().get("location").unwrap();
        assert_eq!(location, endpoints::BILLS_VIEW);
    }
}

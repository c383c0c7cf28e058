//! The API endpoints URIs.

/// The root route which redirects to the bills page.
pub const ROOT: &str = "/";
/// The page listing the signed-in employee's bills.
pub const BILLS_VIEW: &str = "/bills";
/// The page with the form for submitting a new bill.
pub const NEW_BILL_VIEW: &str = "/bills/new";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route that renders the receipt preview modal for a bill.
///
/// Expects the receipt URL in the `url` query parameter.
pub const RECEIPT_MODAL: &str = "/api/bills/receipt";
/// The route hit by the "new bill" button on the bills page.
pub const NEW_BILL_CLICK: &str = "/api/bills/new";

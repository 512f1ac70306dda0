use axum::{Router, routing::get};

pub mod invoice_numbers;
pub mod system;

/// Router for everything under `/api`.
pub fn router() -> Router {
    Router::new()
        .route("/invoice-number", get(invoice_numbers::next_invoice_number))
        .route(
            "/invoice-number/temporary",
            get(invoice_numbers::temporary_invoice_number),
        )
}

use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
};

use crate::app::dto;
use crate::app::errors;
use crate::app::services::AppServices;

/// `GET /api/invoice-number`: issue the next authoritative number.
pub async fn next_invoice_number(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.next_invoice_number() {
        Ok(invoice_number) => (
            StatusCode::OK,
            Json(dto::InvoiceNumberResponse { invoice_number }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to issue invoice number");
            errors::number_error_to_response(e)
        }
    }
}

/// `GET /api/invoice-number/temporary?prefix=...`: draft number, not unique.
pub async fn temporary_invoice_number(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::TemporaryNumberQuery>,
) -> axum::response::Response {
    match services.temporary_invoice_number(query.prefix.as_deref()) {
        Ok(invoice_number) => (
            StatusCode::OK,
            Json(dto::TemporaryInvoiceNumberResponse {
                invoice_number,
                temporary: true,
            }),
        )
            .into_response(),
        Err(e) => errors::number_error_to_response(e),
    }
}

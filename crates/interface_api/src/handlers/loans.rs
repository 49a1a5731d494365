//! Loan handlers

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tracing::{debug, info};

use core_kernel::LoanId;
use domain_loan::LoanRepository;

use crate::dto::loan::{CreateLoanRequest, LoanResponse};
use crate::{AppState, error::{ApiError, ErrorResponse}};

/// Creates a loan from a raw product name body
///
/// Responds 200 with an empty body; the new resource is named in `Location`.
#[utoipa::path(
    post,
    path = "/loans",
    tag = "loans",
    request_body(content = String, content_type = "text/plain", description = "Product name; surrounding whitespace is trimmed"),
    responses(
        (status = 200, description = "Loan created", headers(("Location" = String, description = "Path of the new loan"))),
        (status = 400, description = "Product name is empty or not UTF-8", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn create_loan(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let text = std::str::from_utf8(&body)
        .map_err(|_| ApiError::validation_field("product_name", "body must be UTF-8 text"))?;

    let product_name = CreateLoanRequest::from_body(text).into_product_name()?;

    let id = state.loans.insert_loan(&product_name).await?;
    info!(loan_id = %id, "Loan created");

    Ok((StatusCode::OK, [(header::LOCATION, format!("/loans/{id}"))]))
}

/// Gets a loan by ID
///
/// A segment that is not an integer never names a loan, so it is a 404 like
/// any unknown id.
#[utoipa::path(
    get,
    path = "/loans/{loan_id}",
    tag = "loans",
    params(("loan_id" = i64, Path, description = "Loan id")),
    responses(
        (status = 200, description = "Loan found", body = LoanResponse),
        (status = 404, description = "No loan with this id"),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn get_loan(
    State(state): State<AppState>,
    loan_id: Result<Path<LoanId>, PathRejection>,
) -> Result<Json<LoanResponse>, ApiError> {
    let Path(id) = loan_id.map_err(|rejection| {
        debug!(%rejection, "Loan id is not an integer");
        ApiError::NotFound
    })?;

    let loan = state.loans.get_loan(id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(LoanResponse::from(loan)))
}

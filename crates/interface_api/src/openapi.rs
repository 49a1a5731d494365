//! OpenAPI document for the loan endpoints
//!
//! Served as JSON at `/api-docs/openapi.json` and browsable through the
//! Swagger UI mounted at `/docs`.

use utoipa::OpenApi;

use crate::dto::loan::LoanResponse;
use crate::error::ErrorResponse;
use crate::handlers::{health, loans};

#[derive(OpenApi)]
#[openapi(
    info(title = "Loan Service", description = "Create loans and fetch them by id"),
    paths(
        loans::create_loan,
        loans::get_loan,
        health::health_check,
        health::readiness_check,
    ),
    components(schemas(LoanResponse, ErrorResponse, health::HealthResponse)),
    tags(
        (name = "loans", description = "Loan records"),
        (name = "health", description = "Liveness and readiness probes"),
    )
)]
pub struct ApiDoc;

/// Path of the generated document
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_loan_paths() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/loans"));
        assert!(doc.paths.paths.contains_key("/loans/{loan_id}"));
        assert!(doc.paths.paths.contains_key("/health/ready"));
    }

    #[test]
    fn test_document_carries_response_schemas() {
        let components = ApiDoc::openapi().components.unwrap();

        assert!(components.schemas.contains_key("LoanResponse"));
        assert!(components.schemas.contains_key("ErrorResponse"));
    }
}

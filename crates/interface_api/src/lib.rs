//! HTTP API Layer
//!
//! This crate provides the REST API for the loan service using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: `POST /loans`, `GET /loans/:loan_id`, and health probes
//! - **Middleware**: request ids, tracing spans, and request logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//! - **OpenAPI**: generated document plus Swagger UI at `/docs`
//!
//! Handlers reach storage only through the `LoanRepository` port, so the
//! router can be served over PostgreSQL or over an in-memory adapter.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(Arc::new(PostgresLoanAdapter::new(pool)));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;
pub mod openapi;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use domain_loan::LoanRepository;

use crate::handlers::{health, loans};
use crate::middleware::request_logging;
use crate::openapi::{ApiDoc, OPENAPI_JSON_PATH};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub loans: Arc<dyn LoanRepository>,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `repository` - Storage adapter for loans
pub fn create_router(repository: Arc<dyn LoanRepository>) -> Router {
    let state = AppState { loans: repository };

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let loan_routes = Router::new()
        .route("/loans", post(loans::create_loan))
        .route("/loans/:loan_id", get(loans::get_loan));

    Router::new()
        .merge(health_routes)
        .merge(loan_routes)
        .merge(SwaggerUi::new("/docs").url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(axum_middleware::from_fn(request_logging)),
        )
        .with_state(state)
}

//! Loan DTOs

use serde::Serialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use domain_loan::{Loan, ProductName};

use crate::error::ApiError;

/// Input of `POST /loans`, built from the raw request body
#[derive(Debug, Validate)]
pub struct CreateLoanRequest {
    #[validate(custom(function = "validate_product_name"))]
    pub product_name: String,
}

impl CreateLoanRequest {
    /// Takes the body text as the product name, untrimmed
    pub fn from_body(body: &str) -> Self {
        Self {
            product_name: body.to_string(),
        }
    }

    /// Validates the request and yields the trimmed product name
    pub fn into_product_name(self) -> Result<ProductName, ApiError> {
        self.validate()?;
        Ok(ProductName::parse(&self.product_name)?)
    }
}

fn validate_product_name(value: &str) -> Result<(), ValidationError> {
    ProductName::parse(value).map(|_| ()).map_err(|e| {
        let mut error = ValidationError::new("empty");
        error.message = Some(e.to_string().into());
        error
    })
}

/// Output of `GET /loans/:loan_id`; every field is rendered as a string
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoanResponse {
    #[schema(example = "1")]
    pub id: String,
    #[schema(example = "Personal Loan")]
    pub product_name: String,
}

impl From<Loan> for LoanResponse {
    fn from(loan: Loan) -> Self {
        Self {
            id: loan.id.to_string(),
            product_name: loan.product_name.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::LoanId;

    #[test]
    fn test_request_yields_trimmed_name() {
        let request = CreateLoanRequest::from_body("\n Personal Loan \t");
        assert!(request.validate().is_ok());

        let name = request.into_product_name().unwrap();
        assert_eq!(name.as_str(), "Personal Loan");
    }

    #[test]
    fn test_blank_request_fails_validation() {
        let errors = CreateLoanRequest::from_body("   ").validate().unwrap_err();
        let field = &errors.field_errors()["product_name"];
        assert_eq!(
            field[0].message.as_deref(),
            Some("product name must not be empty")
        );
    }

    #[test]
    fn test_separator_only_request_fails_validation() {
        let result = CreateLoanRequest::from_body("\u{1c}").into_product_name();
        assert!(matches!(result, Err(ApiError::Validation { .. })));
    }

    #[test]
    fn test_response_shape() {
        let loan = Loan::new(LoanId::new(1), ProductName::parse("Personal Loan").unwrap());
        let json = serde_json::to_value(LoanResponse::from(loan)).unwrap();

        assert_eq!(json, serde_json::json!({ "id": "1", "productName": "Personal Loan" }));
    }
}

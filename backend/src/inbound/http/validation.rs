//! Shared validation helpers for inbound HTTP adapters.

use actix_web::HttpRequest;
use serde_json::json;
use uuid::Uuid;

use crate::domain::{AnonymousToken, Category, Error};

/// Request header carrying the client's persisted anonymous token.
pub const ANON_TOKEN_HEADER: &str = "X-Anon-Token";

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingHeader,
    InvalidUuid,
    InvalidCategory,
    InvalidToken,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingHeader => "missing_header",
            ErrorCode::InvalidUuid => "invalid_uuid",
            ErrorCode::InvalidCategory => "invalid_category",
            ErrorCode::InvalidToken => "invalid_token",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

fn field_error(field: &str, message: String, code: ErrorCode, value: Option<&str>) -> Error {
    let details = match value {
        Some(value) => json!({ "field": field, "value": value, "code": code.as_str() }),
        None => json!({ "field": field, "code": code.as_str() }),
    };
    Error::invalid_request(message).with_details(details)
}

pub(crate) fn parse_uuid(value: &str, field: FieldName) -> Result<Uuid, Error> {
    let field = field.as_str();
    Uuid::parse_str(value).map_err(|_| {
        field_error(
            field,
            format!("{field} must be a valid UUID"),
            ErrorCode::InvalidUuid,
            Some(value),
        )
    })
}

pub(crate) fn parse_category(value: &str) -> Result<Category, Error> {
    value.parse::<Category>().map_err(|_| {
        let allowed: Vec<_> = Category::ALL.iter().map(|c| c.as_str()).collect();
        Error::invalid_request("category must be one of the fixed set").with_details(json!({
            "field": "category",
            "value": value,
            "allowed": allowed,
            "code": ErrorCode::InvalidCategory.as_str(),
        }))
    })
}

/// Extract and validate the anonymous token from the request headers.
pub(crate) fn anon_token_from_request(req: &HttpRequest) -> Result<AnonymousToken, Error> {
    let raw = req
        .headers()
        .get(ANON_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| {
            field_error(
                ANON_TOKEN_HEADER,
                format!("missing required header: {ANON_TOKEN_HEADER}"),
                ErrorCode::MissingHeader,
                None,
            )
        })?;

    AnonymousToken::new(raw).map_err(|err| {
        field_error(
            ANON_TOKEN_HEADER,
            err.to_string(),
            ErrorCode::InvalidToken,
            Some(raw),
        )
    })
}

#[cfg(test)]
mod tests {
    use actix_web::test::TestRequest;
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn parse_uuid_accepts_canonical_form() {
        let parsed = parse_uuid("3fa85f64-5717-4562-b3fc-2c963f66afa6", FieldName::new("id"))
            .expect("valid uuid");
        assert_eq!(parsed.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
    }

    #[rstest]
    fn parse_uuid_reports_field_and_value() {
        let err = parse_uuid("nope", FieldName::new("questionId")).expect_err("invalid uuid");
        let details = err.details().expect("details present");
        assert_eq!(details["field"], "questionId");
        assert_eq!(details["value"], "nope");
    }

    #[rstest]
    fn parse_category_lists_the_allowed_set() {
        let err = parse_category("gardening").expect_err("unknown category");
        let details = err.details().expect("details present");
        assert_eq!(details["allowed"].as_array().map(Vec::len), Some(5));
    }

    #[rstest]
    fn missing_token_header_is_reported() {
        let req = TestRequest::default().to_http_request();
        let err = anon_token_from_request(&req).expect_err("missing header");
        let details = err.details().expect("details present");
        assert_eq!(details["code"], "missing_header");
    }

    #[rstest]
    fn malformed_token_header_is_reported() {
        let req = TestRequest::default()
            .insert_header((ANON_TOKEN_HEADER, "not-a-uuid"))
            .to_http_request();
        let err = anon_token_from_request(&req).expect_err("invalid token");
        let details = err.details().expect("details present");
        assert_eq!(details["code"], "invalid_token");
    }

    #[rstest]
    fn well_formed_token_header_is_accepted() {
        let req = TestRequest::default()
            .insert_header((ANON_TOKEN_HEADER, "3fa85f64-5717-4562-b3fc-2c963f66afa6"))
            .to_http_request();
        let token = anon_token_from_request(&req).expect("valid token");
        assert_eq!(token.as_ref(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
    }
}

//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every helper returns an `invalid_request` [`Error`] whose details carry the
//! offending `field` and a machine-readable `code`.

use pagination::{PageRequest, PageRequestError};
use serde_json::json;

use crate::domain::{Error, LoginValidationError, RegistrationValidationError, UserId};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidUuid,
    InvalidFormat,
    InvalidPage,
    InvalidLimit,
    LimitTooLarge,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidUuid => "invalid_uuid",
            Self::InvalidFormat => "invalid_format",
            Self::InvalidPage => "invalid_page",
            Self::InvalidLimit => "invalid_limit",
            Self::LimitTooLarge => "limit_too_large",
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

    fn as_str(self) -> &'static str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: &'static str,
    message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: &str) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value,
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName, message: impl Into<String>) -> Error {
    ValidationError::new(field.as_str(), message).with_code(ErrorCode::MissingField)
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must be a valid UUID"))
        .with_value(ErrorCode::InvalidUuid, value)
}

/// Parse a required user id, rejecting absent, blank, and malformed values.
pub(crate) fn parse_user_id(value: Option<&str>, field: FieldName) -> Result<UserId, Error> {
    let raw = value
        .filter(|raw| !raw.trim().is_empty())
        .ok_or_else(|| missing_field_error(field, format!("{} is required", field.as_str())))?;
    UserId::new(raw.trim()).map_err(|_| invalid_uuid_error(field, raw))
}

/// Parse `page` and `limit` query values into a [`PageRequest`].
pub(crate) fn parse_page_request(
    page: Option<&str>,
    limit: Option<&str>,
    default_limit: u32,
) -> Result<PageRequest, Error> {
    PageRequest::from_query(page, limit, default_limit).map_err(map_page_request_error)
}

pub(crate) fn map_page_request_error(err: PageRequestError) -> Error {
    let code = match err {
        PageRequestError::InvalidPage { .. } => ErrorCode::InvalidPage,
        PageRequestError::InvalidLimit { .. } => ErrorCode::InvalidLimit,
        PageRequestError::LimitTooLarge { .. } => ErrorCode::LimitTooLarge,
    };
    ValidationError::new(err.field(), err.to_string()).with_code(code)
}

pub(crate) fn map_login_validation_error(err: LoginValidationError) -> Error {
    let field = match err {
        LoginValidationError::EmptyEmail => "email",
        LoginValidationError::EmptyPassword => "password",
    };
    ValidationError::new(field, err.to_string()).with_code(ErrorCode::MissingField)
}

pub(crate) fn map_registration_error(err: RegistrationValidationError) -> Error {
    let code = match err {
        RegistrationValidationError::MissingField(_) => ErrorCode::MissingField,
        RegistrationValidationError::InvalidName(_)
        | RegistrationValidationError::InvalidEmail(_) => ErrorCode::InvalidFormat,
    };
    ValidationError::new(err.field(), err.to_string()).with_code(code)
}

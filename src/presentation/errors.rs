//! Errors reported to the caller inside a response body.

use serde::Serialize;

/// User-correctable problem with a request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing param: {field}")]
    MissingParam { field: String },
    #[error("Invalid param: {field}")]
    InvalidParam { field: String },
}

impl ValidationError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingParam {
            field: field.into(),
        }
    }

    pub fn invalid(field: impl Into<String>) -> Self {
        Self::InvalidParam {
            field: field.into(),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::MissingParam { .. } => "missing-param",
            Self::InvalidParam { .. } => "invalid-param",
        }
    }

    fn field(&self) -> &str {
        match self {
            Self::MissingParam { field } | Self::InvalidParam { field } => {
                field
            },
        }
    }
}

/// Unexpected internal failure. The cause is never exposed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, thiserror::Error)]
#[error("Internal server error")]
pub struct ServerError;

/// Wire shape of every error body.
#[derive(Debug, Serialize)]
pub(crate) struct ErrorPayload<'a> {
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'a str>,
    message: String,
}

impl<'a> From<&'a ValidationError> for ErrorPayload<'a> {
    fn from(err: &'a ValidationError) -> Self {
        Self {
            kind: err.kind(),
            field: Some(err.field()),
            message: err.to_string(),
        }
    }
}

impl From<&ServerError> for ErrorPayload<'_> {
    fn from(err: &ServerError) -> Self {
        Self {
            kind: "server-error",
            field: None,
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_messages_name_the_field() {
        assert_eq!(
            ValidationError::missing("name").to_string(),
            "Missing param: name"
        );
        assert_eq!(
            ValidationError::invalid("email").to_string(),
            "Invalid param: email"
        );
        assert_eq!(ServerError.to_string(), "Internal server error");
    }

    #[test]
    fn test_payload_shape() {
        let err = ValidationError::missing("password");
        assert_eq!(
            serde_json::to_value(ErrorPayload::from(&err)).unwrap(),
            json!({
                "kind": "missing-param",
                "field": "password",
                "message": "Missing param: password",
            })
        );
        assert_eq!(
            serde_json::to_value(ErrorPayload::from(&ServerError)).unwrap(),
            json!({
                "kind": "server-error",
                "message": "Internal server error",
            })
        );
    }
}

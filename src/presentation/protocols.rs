//! Generic request/response envelopes shared by controllers.

use async_trait::async_trait;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize, Serializer};

use super::errors::{ErrorPayload, ServerError, ValidationError};
use crate::domain::Account;

/// Inbound envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpRequest<B> {
    pub body: B,
}

impl<B> HttpRequest<B> {
    pub fn new(body: B) -> Self {
        Self { body }
    }
}

/// Outbound envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status_code: StatusCode,
    pub body: ResponseBody,
}

/// Payload of an [`HttpResponse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseBody {
    Account(Account),
    Validation(ValidationError),
    Server(ServerError),
}

impl Serialize for ResponseBody {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Account(account) => account.serialize(serializer),
            Self::Validation(err) => ErrorPayload::from(err).serialize(serializer),
            Self::Server(err) => ErrorPayload::from(err).serialize(serializer),
        }
    }
}

/// Signup form. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignupBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

pub type SignupRequest = HttpRequest<SignupBody>;
pub type SignupResponse = HttpResponse;

/// Anything turning a request envelope into a response envelope.
///
/// Never fails: every failure is a response.
#[async_trait]
pub trait Controller<B: Send + 'static>: Send + Sync {
    async fn handle(&self, request: HttpRequest<B>) -> HttpResponse;
}

//! Shortcuts building [`HttpResponse`]s.

use axum::http::StatusCode;

use super::errors::{ServerError, ValidationError};
use super::protocols::{HttpResponse, ResponseBody};
use crate::domain::Account;

pub fn bad_request(error: ValidationError) -> HttpResponse {
    HttpResponse {
        status_code: StatusCode::BAD_REQUEST,
        body: ResponseBody::Validation(error),
    }
}

pub fn ok(account: Account) -> HttpResponse {
    HttpResponse {
        status_code: StatusCode::OK,
        body: ResponseBody::Account(account),
    }
}

pub fn server_error() -> HttpResponse {
    HttpResponse {
        status_code: StatusCode::INTERNAL_SERVER_ERROR,
        body: ResponseBody::Server(ServerError),
    }
}

//! `POST /signup`.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};

use crate::AppState;
use crate::presentation::helpers::bad_request;
use crate::presentation::{HttpRequest, HttpResponse, SignupBody, ValidationError};

impl IntoResponse for HttpResponse {
    fn into_response(self) -> Response {
        (self.status_code, Json(self.body)).into_response()
    }
}

/// Handler to create an account.
pub async fn handler(
    State(state): State<AppState>,
    body: Result<Json<SignupBody>, JsonRejection>,
) -> HttpResponse {
    let body = match body {
        Ok(Json(body)) => body,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "signup body rejected");
            return bad_request(ValidationError::invalid("body"));
        },
    };

    state.signup.handle(HttpRequest::new(body)).await
}

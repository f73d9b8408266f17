//! Signup controller.

use async_trait::async_trait;

use super::errors::ValidationError;
use super::helpers::{bad_request, ok, server_error};
use super::protocols::{Controller, SignupBody, SignupRequest, SignupResponse};
use crate::domain::AccountDraft;
use crate::domain::error::DomainError;
use crate::ports::inbound::CreateAccount;
use crate::ports::outbound::EmailValidator;

/// Validates a signup request and delegates account creation.
pub struct SignupController {
    email_validator: Box<dyn EmailValidator>,
    create_account: Box<dyn CreateAccount>,
}

impl SignupController {
    pub fn new(
        email_validator: Box<dyn EmailValidator>,
        create_account: Box<dyn CreateAccount>,
    ) -> Self {
        Self {
            email_validator,
            create_account,
        }
    }
}

#[async_trait]
impl Controller<SignupBody> for SignupController {
    async fn handle(&self, request: SignupRequest) -> SignupResponse {
        let SignupBody {
            name,
            email,
            password,
        } = request.body;

        let draft = match AccountDraft::new(
            name.unwrap_or_default(),
            email.unwrap_or_default(),
            password.unwrap_or_default(),
        ) {
            Ok(draft) => draft,
            Err(DomainError::MissingField { field }) => {
                return bad_request(ValidationError::missing(field));
            },
        };

        match self.email_validator.is_valid(draft.email()) {
            Ok(true) => {},
            Ok(false) => return bad_request(ValidationError::invalid("email")),
            Err(err) => {
                tracing::error!(error = %err, "email validation failed");
                return server_error();
            },
        }

        match self.create_account.add(draft).await {
            Ok(account) => ok(account),
            Err(err) => {
                tracing::error!(error = %err, "account creation failed");
                server_error()
            },
        }
    }
}

use std::sync::Arc;
use axum::{
    Form,
    Json,
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::models::contact_models::{validate, ContactSubmission, ValidationError};
use crate::utils::mail_utils::{DispatchError, OutgoingMail};
use crate::AppState;

pub const DISPATCH_FAILED: &str = "Message could not be sent.";

#[derive(Debug, Error)]
pub enum RelayError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// Validate, then make exactly one dispatch attempt.
pub async fn relay_submission(state: &AppState, submission: ContactSubmission) -> Result<(), RelayError> {
    let contact = match validate(submission) {
        Ok(contact) => contact,
        Err(e) => {
            tracing::warn!("Rejected contact submission: {}", e);
            return Err(e.into());
        }
    };

    let mail = match OutgoingMail::compose(&state.config, &contact) {
        Ok(mail) => mail,
        Err(e) => {
            tracing::error!("Failed to build contact message from {}: {}", contact.reply_to, e);
            return Err(e.into());
        }
    };
    match state.mailer.dispatch(mail).await {
        Ok(()) => {
            tracing::info!("Contact message from {} dispatched", contact.reply_to);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Failed to dispatch contact message from {}: {}", contact.reply_to, e);
            Err(e.into())
        }
    }
}

// POST /contact, form-encoded. Redirects to the thank-you page or answers in plain text.
// A body that is not a readable form carries no fields, so it is treated as empty.
pub async fn submit_contact_form(
    State(state): State<Arc<AppState>>,
    form: Result<Form<ContactSubmission>, FormRejection>,
) -> Response {
    let submission = match form {
        Ok(Form(submission)) => submission,
        Err(rejection) => {
            tracing::warn!("Unreadable contact form body: {}", rejection);
            ContactSubmission::default()
        }
    };

    match relay_submission(&state, submission).await {
        Ok(()) => Redirect::to(&state.config.thank_you_path).into_response(),
        Err(RelayError::Validation(e)) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()).into_response(),
        Err(RelayError::Dispatch(_)) => (StatusCode::BAD_GATEWAY, DISPATCH_FAILED).into_response(),
    }
}

// POST /api/contact, JSON. Used by the frontend in live mode.
pub async fn submit_contact_json(
    State(state): State<Arc<AppState>>,
    Json(submission): Json<ContactSubmission>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    match relay_submission(&state, submission).await {
        Ok(()) => Ok(Json(json!({"message": "Thank you, your message has been sent."}))),
        Err(RelayError::Validation(e)) => Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"error": e.to_string()}))
        )),
        Err(RelayError::Dispatch(_)) => Err((
            StatusCode::BAD_GATEWAY,
            Json(json!({"error": DISPATCH_FAILED}))
        )),
    }
}

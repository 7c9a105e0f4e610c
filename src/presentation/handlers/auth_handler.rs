use std::sync::Arc;

use axum::{
    Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post,
};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        error::{DomainError, RepositoryError},
        repositories::credential_repository::CredentialRepository,
    },
    usecase::reset_password_usecase::ResetPasswordUsecase,
};

// Request

/// json for reset-password request
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub email: Option<String>,
    pub old_password: Option<String>,
    pub new_password: Option<String>,
}

/// json for change-password request
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub email: Option<String>,
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

// Response

#[derive(Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

/* Router Function and Handler Function */

/// function return Router object
/// Suppose to be nested by main router under /api/auth
pub fn create_auth_router<R: CredentialRepository + Send + Sync + 'static>(
    reset_service: ResetPasswordUsecase<R>,
) -> Router {
    let state = AppState {
        reset_service: Arc::new(reset_service),
    };

    Router::new()
        .route("/reset-password", post(reset_password::<R>))
        .route("/change-password", post(change_password::<R>))
        .with_state(state)
}

pub struct AppState<R: CredentialRepository> {
    pub reset_service: Arc<ResetPasswordUsecase<R>>,
}

impl<R: CredentialRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            reset_service: Arc::clone(&self.reset_service),
        }
    }
}

// handler function

/// handler function for health check
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// handler function for reset-password
async fn reset_password<R: CredentialRepository + Send + Sync>(
    State(state): State<AppState<R>>,
    Json(payload): Json<ResetPasswordRequest>,
) -> impl IntoResponse {
    let (Some(email), Some(old_password), Some(new_password)) =
        (payload.email, payload.old_password, payload.new_password)
    else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Email, old password and new password are required",
        );
    };

    match state
        .reset_service
        .reset_password(&email, &old_password, &new_password)
        .await
    {
        Ok(()) => success_response("Password reset successfully"),
        Err(err) => domain_error_response(err, "Invalid old password"),
    }
}

/// handler function for change-password
async fn change_password<R: CredentialRepository + Send + Sync>(
    State(state): State<AppState<R>>,
    Json(payload): Json<ChangePasswordRequest>,
) -> impl IntoResponse {
    let (Some(email), Some(current_password), Some(new_password)) =
        (payload.email, payload.current_password, payload.new_password)
    else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Email, current password and new password are required",
        );
    };

    match state
        .reset_service
        .reset_password(&email, &current_password, &new_password)
        .await
    {
        Ok(()) => success_response("Password changed successfully"),
        Err(err) => domain_error_response(err, "Current password is incorrect"),
    }
}

fn success_response(message: &str) -> axum::response::Response {
    (
        StatusCode::OK,
        Json(MessageResponse {
            message: message.to_string(),
        }),
    )
        .into_response()
}

fn error_response(status: StatusCode, message: &str) -> axum::response::Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// Map a domain error to an HTTP response. Store detail is logged, never
/// returned to the caller.
fn domain_error_response(err: DomainError, mismatch_message: &str) -> axum::response::Response {
    match err {
        DomainError::WeakPassword => error_response(
            StatusCode::BAD_REQUEST,
            "Password must be at least 8 characters long",
        ),
        DomainError::CredentialMismatch => {
            error_response(StatusCode::BAD_REQUEST, mismatch_message)
        }
        DomainError::Repository(RepositoryError::NotFound) => {
            error_response(StatusCode::NOT_FOUND, "User not found")
        }
        DomainError::Repository(RepositoryError::StoreError(detail)) => {
            tracing::error!(error = %detail, "table store call failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization` header. Results in 401.
    #[error("Token is missing")]
    MissingToken,

    /// Token signature or shape is invalid, or the account behind it is gone or deactivated.
    ///
    /// Results in 401.
    #[error("Invalid token")]
    InvalidToken,

    /// Token was valid but its `exp` has passed. Results in 401.
    #[error("Token has expired")]
    ExpiredToken,

    /// Login with an unknown username or wrong password. Results in 401.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Login to a deactivated account. Results in 401.
    #[error("Account is deactivated")]
    AccountDeactivated,

    /// Authenticated user lacks the required permission. Results in 403.
    ///
    /// # Fields
    /// - ID of the user denied access
    /// - Description of the permission that was missing
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant except `AccessDenied` maps to 401 Unauthorized with the variant's
/// message. `AccessDenied` maps to 403 Forbidden with a generic admin message; the
/// detailed reason is only logged.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Admin access required".to_string(),
                }),
            )
                .into_response(),
            err => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: err.to_string(),
                }),
            )
                .into_response(),
        }
    }
}

use thiserror::Error;

/// Internal failures indicating unexpected behavior or broken invariants.
///
/// All variants result in 500 Internal Server Error with a generic message returned
/// to the client.
#[derive(Error, Debug)]
pub enum InternalError {
    /// Argon2 failed to produce a password hash.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),

    /// Signing a bearer token failed.
    #[error("Failed to encode token: {0}")]
    TokenEncoding(#[source] jsonwebtoken::errors::Error),

    /// Serializing submitted quiz answers for storage failed.
    #[error("Failed to serialize quiz answers: {0}")]
    AnswerSerialization(#[source] serde_json::Error),

    /// Binding or serving the HTTP listener failed.
    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

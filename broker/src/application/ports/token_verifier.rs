use crate::domain::AccountId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Authorization header missing or not a bearer token")]
    Missing,

    #[error("Invalid or expired token: {0}")]
    Invalid(String),

    #[error("Token subject is not an account id")]
    InvalidSubject,
}

/// Resolves a bearer token into the authenticated account
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<AccountId, AuthError>;
}

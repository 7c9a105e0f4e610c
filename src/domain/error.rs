use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Invalid credentials")]
    CredentialMismatch,

    #[error("Weak password (minimum 8 characters required)")]
    WeakPassword,
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Not found")]
    NotFound,

    #[error("Store error: {0}")]
    StoreError(String),
}

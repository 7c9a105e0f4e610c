use async_trait::async_trait;

use crate::domain::{
    error::RepositoryError,
    models::credential::{CredentialRecord, PasswordDigest},
};

/// Repository over the remote table store holding user rows.
#[async_trait]
pub trait CredentialRepository {
    /// Exact-match lookup by email. When the store returns several rows for
    /// the same email, the first one wins.
    async fn find_by_email(&self, email: &str) -> Result<CredentialRecord, RepositoryError>;

    /// Patch the password field of a single row, leaving every other field
    /// untouched.
    async fn update_password(
        &self,
        record_id: &str,
        digest: &PasswordDigest,
    ) -> Result<(), RepositoryError>;
}

use serde::{Deserialize, Serialize};

/// Value object representing a password digest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Create a new PasswordDigest from an already computed digest string
    pub fn new(digest: String) -> Self {
        Self(digest)
    }

    /// Get the digest as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A user row fetched from the remote table store.
///
/// `stored_password` is either a digest or legacy plaintext; which one it is
/// can only be decided at verification time.
#[derive(Debug, Clone)]
pub struct CredentialRecord {
    record_id: String,
    email: String,
    name: Option<String>,
    stored_password: String,
}

impl CredentialRecord {
    pub fn new(
        record_id: String,
        email: String,
        name: Option<String>,
        stored_password: String,
    ) -> Self {
        Self {
            record_id,
            email,
            name,
            stored_password,
        }
    }

    pub fn record_id(&self) -> &str {
        &self.record_id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn stored_password(&self) -> &str {
        &self.stored_password
    }
}

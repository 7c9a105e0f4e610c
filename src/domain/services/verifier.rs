use crate::domain::services::digest::digest;

/// Result of comparing a stored credential against a presented plaintext.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// Stored value matched the digest of the presented password.
    AcceptedHashed,
    /// Stored value matched the presented password literally; the record is
    /// still in legacy plaintext form and an upgrade write is due.
    AcceptedPlaintextNeedsUpgrade,
    /// No match under either interpretation.
    Rejected,
}

impl VerificationOutcome {
    pub fn is_accepted(self) -> bool {
        !matches!(self, Self::Rejected)
    }

    pub fn needs_upgrade(self) -> bool {
        matches!(self, Self::AcceptedPlaintextNeedsUpgrade)
    }
}

/// Verify a presented password against whichever form the store holds.
///
/// The hashed comparison runs first, so once a record has been migrated the
/// plaintext branch is dead code for it. A stored value that equals both its
/// own digest and the presented string is ambiguous; the hashed interpretation
/// wins, which is a known limitation of the scheme.
pub fn verify(stored_value: &str, presented: &str) -> VerificationOutcome {
    let d = digest(presented);
    if stored_value == d.as_str() {
        VerificationOutcome::AcceptedHashed
    } else if stored_value == presented {
        VerificationOutcome::AcceptedPlaintextNeedsUpgrade
    } else {
        VerificationOutcome::Rejected
    }
}

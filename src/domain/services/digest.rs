use crate::domain::models::credential::PasswordDigest;

/// Compute the checksum digest of a password.
///
/// Rolling polynomial accumulator over UTF-16 code units (character codes,
/// not bytes, so digests of non-ASCII passwords stay compatible with values
/// already in the store), reduced with wrapping 32-bit signed arithmetic and
/// rendered as the hex form of the absolute value. Hex is the canonical radix;
/// legacy decimal digests fail the hashed comparison and are repaired through
/// the plaintext-migration path.
///
/// Not a cryptographic hash. It is kept only for compatibility with the
/// digests already stored in the table service.
pub fn digest(password: &str) -> PasswordDigest {
    let mut hash: i32 = 0;
    for code in password.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(code));
    }
    PasswordDigest::new(format!("{:x}", hash.unsigned_abs()))
}

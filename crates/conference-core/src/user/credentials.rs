//! Password hashing seam.

use crate::error::Result;

/// Hashes and verifies account passwords.
///
/// Implementations must produce self-describing hashes (algorithm, salt and
/// parameters encoded in the string) so `verify` needs nothing else.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String>;

    /// Returns `Ok(false)` on mismatch; errors are reserved for malformed
    /// hashes.
    fn verify(&self, password: &str, hash: &str) -> Result<bool>;
}

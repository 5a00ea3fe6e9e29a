//! User repository trait.
//!
//! Covers both the user collection and the authentication surface, which
//! are keyed by email.

use super::model::{UserProfile, UserRole};
use crate::error::Result;
use crate::observable::ListStream;

#[async_trait::async_trait]
pub trait UserRepository: Send + Sync {
    /// The signed-in user, if any.
    async fn current_user(&self) -> Option<UserProfile>;

    /// Signs in with email and password and makes the user current.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no account uses this email
    /// - `Unauthorized` if the password does not match
    async fn sign_in(&self, email: &str, password: &str) -> Result<UserProfile>;

    /// Registers a new account and makes it current.
    ///
    /// # Errors
    ///
    /// - `Conflict` if the email is already registered
    /// - `Validation` if the email or name is malformed
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: &str,
        role: UserRole,
    ) -> Result<UserProfile>;

    async fn sign_out(&self) -> Result<()>;

    /// Replaces the stored profile with the same id.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no user has this id
    /// - `Conflict` if the new email belongs to another user
    async fn update_profile(&self, user: UserProfile) -> Result<UserProfile>;

    async fn get_by_id(&self, user_id: &str) -> Option<UserProfile>;

    /// Subscribes to the user list, in registration order.
    fn list(&self) -> ListStream<UserProfile>;

    /// Removes the user, signing them out if they are current.
    async fn delete(&self, user_id: &str) -> Result<()>;
}

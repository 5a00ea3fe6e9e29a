//! In-memory user repository with email/password authentication.
//!
//! Profiles live in an [`InMemoryStore`]; password hashes are kept in a
//! separate map keyed by user id and never leave this module.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use conference_core::config::Operation;
use conference_core::entity::Entity;
use conference_core::error::{ConferenceError, Result};
use conference_core::id::new_entity_id;
use conference_core::observable::ListStream;
use conference_core::user::{
    PasswordHasher, UserProfile, UserRepository, UserRole, normalize_email,
};

use crate::in_memory_store::{InMemoryStore, StoreSettings};
use crate::password_hasher::Argon2PasswordHasher;

pub struct InMemoryUserRepository {
    store: InMemoryStore<UserProfile>,
    /// user id -> password hash
    credentials: Mutex<HashMap<String, String>>,
    current: RwLock<Option<UserProfile>>,
    hasher: Arc<dyn PasswordHasher>,
}

impl InMemoryUserRepository {
    pub fn new(settings: StoreSettings, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            store: InMemoryStore::new(Vec::new(), settings),
            credentials: Mutex::new(HashMap::new()),
            current: RwLock::new(None),
            hasher,
        }
    }

    /// Creates an empty repository hashing passwords with Argon2id.
    pub fn with_argon2(settings: StoreSettings) -> Self {
        Self::new(settings, Arc::new(Argon2PasswordHasher::new()))
    }

    fn find_by_email(&self, email: &str) -> Option<UserProfile> {
        self.store
            .filter(|user| user.email == email)
            .into_iter()
            .next()
    }

    fn check(&self, user: &UserProfile) -> Result<()> {
        if self.store.settings().validate {
            user.validate()?;
        }
        Ok(())
    }

    async fn hash_password(&self, password: &str) -> Result<String> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_string();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| ConferenceError::internal(format!("Password hashing task failed: {}", e)))?
    }

    async fn verify_password(&self, password: &str, hash: String) -> Result<bool> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_string();
        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| {
                ConferenceError::internal(format!("Password verification task failed: {}", e))
            })?
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn current_user(&self) -> Option<UserProfile> {
        self.current.read().await.clone()
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<UserProfile> {
        self.store.simulate_latency(Operation::Authenticate).await;

        let email = normalize_email(email);
        let user = self
            .find_by_email(&email)
            .ok_or_else(|| ConferenceError::not_found(UserProfile::KIND, &email))?;

        let hash = self.credentials.lock().await.get(&user.id).cloned();
        let verified = match hash {
            Some(hash) => self.verify_password(password, hash).await?,
            None => false,
        };
        if !verified {
            tracing::info!("[InMemoryUserRepository] rejected sign-in for {}", email);
            return Err(ConferenceError::unauthorized("invalid email or password"));
        }

        *self.current.write().await = Some(user.clone());
        tracing::info!("[InMemoryUserRepository] signed in: {}", user.id);
        Ok(user)
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: &str,
        role: UserRole,
    ) -> Result<UserProfile> {
        if password.is_empty() {
            return Err(ConferenceError::validation("password must not be empty"));
        }
        let user = UserProfile::new(new_entity_id("user"), email, name.trim(), role);
        self.check(&user)?;
        if self.find_by_email(&user.email).is_some() {
            return Err(ConferenceError::conflict(UserProfile::KIND, &user.email));
        }

        let hash = self.hash_password(password).await?;
        self.credentials.lock().await.insert(user.id.clone(), hash);

        let inserted = self
            .store
            .mutate(Operation::Authenticate, |users| {
                if users.iter().any(|existing| existing.email == user.email) {
                    return Err(ConferenceError::conflict(UserProfile::KIND, &user.email));
                }
                users.push(user.clone());
                Ok(())
            })
            .await;

        if let Err(err) = inserted {
            self.credentials.lock().await.remove(&user.id);
            return Err(err);
        }

        *self.current.write().await = Some(user.clone());
        tracing::info!("[InMemoryUserRepository] registered {} as {}", user.id, user.role);
        Ok(user)
    }

    async fn sign_out(&self) -> Result<()> {
        if let Some(user) = self.current.write().await.take() {
            tracing::info!("[InMemoryUserRepository] signed out: {}", user.id);
        }
        Ok(())
    }

    async fn update_profile(&self, mut user: UserProfile) -> Result<UserProfile> {
        user.email = normalize_email(&user.email);
        self.check(&user)?;

        let updated = user.clone();
        self.store
            .mutate(Operation::Update, move |users| {
                if users
                    .iter()
                    .any(|existing| existing.id != user.id && existing.email == user.email)
                {
                    return Err(ConferenceError::conflict(UserProfile::KIND, &user.email));
                }
                let slot = users
                    .iter_mut()
                    .find(|existing| existing.id == user.id)
                    .ok_or_else(|| ConferenceError::not_found(UserProfile::KIND, &user.id))?;
                *slot = user;
                Ok(())
            })
            .await?;

        let mut current = self.current.write().await;
        if current.as_ref().is_some_and(|c| c.id == updated.id) {
            *current = Some(updated.clone());
        }
        Ok(updated)
    }

    async fn get_by_id(&self, user_id: &str) -> Option<UserProfile> {
        self.store.find(user_id)
    }

    fn list(&self) -> ListStream<UserProfile> {
        self.store.subscribe()
    }

    async fn delete(&self, user_id: &str) -> Result<()> {
        self.store.remove(user_id).await?;
        self.credentials.lock().await.remove(user_id);

        let mut current = self.current.write().await;
        if current.as_ref().is_some_and(|c| c.id == user_id) {
            *current = None;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Cheap reversible "hash" so tests don't pay for Argon2.
    struct PlainHasher;

    impl PasswordHasher for PlainHasher {
        fn hash(&self, password: &str) -> Result<String> {
            Ok(format!("plain:{}", password))
        }

        fn verify(&self, password: &str, hash: &str) -> Result<bool> {
            Ok(hash == format!("plain:{}", password))
        }
    }

    fn repo() -> InMemoryUserRepository {
        InMemoryUserRepository::new(StoreSettings::default(), Arc::new(PlainHasher))
    }

    #[tokio::test]
    async fn test_sign_up_makes_user_current_and_retrievable() {
        let repo = repo();
        let user = repo
            .sign_up("Sarah@Faith.org", "pw", "Sarah", UserRole::Organizer)
            .await
            .unwrap();

        assert_eq!(user.email, "sarah@faith.org");
        assert!(user.id.starts_with("user_"));
        assert_eq!(repo.get_by_id(&user.id).await, Some(user.clone()));
        assert_eq!(repo.current_user().await, Some(user));
        assert_eq!(repo.list().current().len(), 1);
    }

    #[tokio::test]
    async fn test_sign_up_duplicate_email_conflicts() {
        let repo = repo();
        repo.sign_up("a@b.org", "pw", "Ann", UserRole::Attendee)
            .await
            .unwrap();

        let err = repo
            .sign_up(" A@B.org", "other", "Imposter", UserRole::Organizer)
            .await
            .unwrap_err();
        assert!(err.is_conflict());
        assert_eq!(repo.list().current().len(), 1);
        assert_eq!(repo.credentials.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn test_sign_up_rejects_bad_input() {
        let repo = repo();
        assert!(repo
            .sign_up("not-an-email", "pw", "Ann", UserRole::Attendee)
            .await
            .unwrap_err()
            .is_validation());
        assert!(repo
            .sign_up("a@b.org", "", "Ann", UserRole::Attendee)
            .await
            .unwrap_err()
            .is_validation());
    }

    #[tokio::test]
    async fn test_sign_in_flow() {
        let repo = repo();
        let user = repo
            .sign_up("a@b.org", "secret", "Ann", UserRole::Attendee)
            .await
            .unwrap();
        repo.sign_out().await.unwrap();
        assert!(repo.current_user().await.is_none());

        assert!(repo
            .sign_in("a@b.org", "wrong")
            .await
            .unwrap_err()
            .is_unauthorized());
        assert!(repo.current_user().await.is_none());

        assert!(repo
            .sign_in("x@b.org", "secret")
            .await
            .unwrap_err()
            .is_not_found());

        let signed_in = repo.sign_in("A@B.ORG", "secret").await.unwrap();
        assert_eq!(signed_in, user);
        assert_eq!(repo.current_user().await, Some(user));
    }

    #[tokio::test]
    async fn test_update_profile() {
        let repo = repo();
        let ann = repo
            .sign_up("ann@b.org", "pw", "Ann", UserRole::Attendee)
            .await
            .unwrap();
        let bob = repo
            .sign_up("bob@b.org", "pw", "Bob", UserRole::Attendee)
            .await
            .unwrap();

        let mut renamed = ann.clone();
        renamed.phone = Some("555-0100".to_string());
        renamed.onboarding_complete = true;
        let updated = repo.update_profile(renamed).await.unwrap();
        assert_eq!(repo.get_by_id(&ann.id).await, Some(updated));

        // Bob is current; his session must not be replaced by Ann's profile.
        assert_eq!(repo.current_user().await.unwrap().id, bob.id);

        let mut stolen = bob.clone();
        stolen.email = "ann@b.org".to_string();
        assert!(repo.update_profile(stolen).await.unwrap_err().is_conflict());

        let ghost = UserProfile::new("user_x", "g@b.org", "Ghost", UserRole::Attendee);
        assert!(repo.update_profile(ghost).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_signs_out_deleted_user() {
        let repo = repo();
        let user = repo
            .sign_up("a@b.org", "pw", "Ann", UserRole::Attendee)
            .await
            .unwrap();

        repo.delete(&user.id).await.unwrap();
        assert!(repo.current_user().await.is_none());
        assert!(repo.get_by_id(&user.id).await.is_none());
        assert!(repo.delete(&user.id).await.unwrap_err().is_not_found());
        assert!(repo.sign_in("a@b.org", "pw").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_argon2_round_trip() {
        let repo = InMemoryUserRepository::with_argon2(StoreSettings::default());
        repo.sign_up("a@b.org", "correct horse", "Ann", UserRole::Attendee)
            .await
            .unwrap();
        repo.sign_out().await.unwrap();

        assert!(repo.sign_in("a@b.org", "correct horse").await.is_ok());
        assert!(repo.sign_in("a@b.org", "battery staple").await.is_err());
    }
}

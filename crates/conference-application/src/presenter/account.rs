//! Presenter for sign-in, sign-up and profile editing.

use std::sync::Arc;
use tokio::sync::watch;

use conference_core::user::{UserProfile, UserRepository, UserRole};

use super::state::OperationState;

pub struct AccountPresenter {
    repository: Arc<dyn UserRepository>,
    current_user: Arc<watch::Sender<Option<UserProfile>>>,
    state: OperationState,
}

impl AccountPresenter {
    /// Creates the presenter, picking up any already signed-in user.
    pub async fn new(repository: Arc<dyn UserRepository>) -> Self {
        let current = repository.current_user().await;
        Self {
            repository,
            current_user: Arc::new(watch::Sender::new(current)),
            state: OperationState::new("AccountPresenter"),
        }
    }

    /// Last signed-in user seen by this presenter.
    ///
    /// The repository owns the session; the copy here is re-read after every
    /// action and by [`refresh`](Self::refresh).
    pub fn current_user(&self) -> Option<UserProfile> {
        self.current_user.borrow().clone()
    }

    pub fn watch_current_user(&self) -> watch::Receiver<Option<UserProfile>> {
        self.current_user.subscribe()
    }

    pub fn is_signed_in(&self) -> bool {
        self.current_user.borrow().is_some()
    }

    pub fn state(&self) -> &OperationState {
        &self.state
    }

    /// Re-reads the signed-in user from the repository.
    pub async fn refresh(&self) {
        sync_current_user(self.repository.as_ref(), &self.current_user).await;
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> bool {
        let repository = Arc::clone(&self.repository);
        let current_user = Arc::clone(&self.current_user);
        let email = email.to_string();
        let password = password.to_string();
        self.state
            .run("Signed in successfully", "Failed to sign in", async move {
                let outcome = repository.sign_in(&email, &password).await;
                sync_current_user(repository.as_ref(), &current_user).await;
                outcome
            })
            .await
            .is_some()
    }

    /// Registers a new account and returns its id.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: &str,
        role: UserRole,
    ) -> Option<String> {
        let repository = Arc::clone(&self.repository);
        let current_user = Arc::clone(&self.current_user);
        let email = email.to_string();
        let password = password.to_string();
        let name = name.to_string();
        self.state
            .run(
                "Account created successfully",
                "Failed to create account",
                async move {
                    let outcome = repository.sign_up(&email, &password, &name, role).await;
                    sync_current_user(repository.as_ref(), &current_user).await;
                    outcome.map(|user| user.id)
                },
            )
            .await
    }

    pub async fn sign_out(&self) -> bool {
        let repository = Arc::clone(&self.repository);
        let current_user = Arc::clone(&self.current_user);
        self.state
            .run("Signed out successfully", "Failed to sign out", async move {
                let outcome = repository.sign_out().await;
                sync_current_user(repository.as_ref(), &current_user).await;
                outcome
            })
            .await
            .is_some()
    }

    pub async fn update_profile(&self, profile: UserProfile) -> bool {
        let repository = Arc::clone(&self.repository);
        let current_user = Arc::clone(&self.current_user);
        self.state
            .run(
                "Profile updated successfully",
                "Failed to update profile",
                async move {
                    let outcome = repository.update_profile(profile).await;
                    sync_current_user(repository.as_ref(), &current_user).await;
                    outcome
                },
            )
            .await
            .is_some()
    }

    pub fn clear_error(&self) {
        self.state.clear_error();
    }

    pub fn clear_operation_result(&self) {
        self.state.clear_operation_result();
    }
}

async fn sync_current_user(
    repository: &dyn UserRepository,
    cell: &watch::Sender<Option<UserProfile>>,
) {
    let latest = repository.current_user().await;
    cell.send_if_modified(|current| {
        if *current == latest {
            return false;
        }
        *current = latest;
        true
    });
}

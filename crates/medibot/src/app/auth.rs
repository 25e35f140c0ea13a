//! Demo login and session flags.
//!
//! Passwords are never checked: any password is accepted for a known email.
//! This is a demonstration affordance, not an authentication boundary.

use tracing::info;

use super::AppStore;
use crate::domain::user::{Role, User};
use crate::seed::demo_credential;

impl AppStore {
    /// Signs in the seed user whose email equals `email`.
    ///
    /// Waits `config.login_delay` first to mimic a network round trip.
    /// Returns `false` and leaves the state untouched when the email is
    /// unknown. Repeating a successful login re-selects the same user.
    pub async fn login(&self, email: &str, _password: &str) -> bool {
        tokio::time::sleep(self.config.login_delay).await;

        let Some(user) = self.users.iter().find(|user| user.email == email).cloned() else {
            info!(email, "Login rejected for unknown email");

            return false;
        };

        info!(user_id = %user.id, role = %user.role, "User logged in");
        self.mutate("login", |state| {
            let changed = !state.is_authenticated || state.current_user.as_ref() != Some(&user);
            state.current_user = Some(user);
            state.is_authenticated = true;

            changed
        });

        true
    }

    /// Signs in with the quick-login credential for `role`.
    ///
    /// Returns `false` for roles without a demo credential.
    pub async fn login_as_demo(&self, role: Role) -> bool {
        let Some(credential) = demo_credential(role) else {
            info!(%role, "No demo credential for role");

            return false;
        };

        self.login(credential.email, credential.password).await
    }

    /// Clears the current user. Safe to call when already logged out.
    pub fn logout(&self) {
        let logged_out = self.mutate("logout", |state| {
            let changed = state.is_authenticated || state.current_user.is_some();
            state.current_user = None;
            state.is_authenticated = false;

            changed
        });

        if logged_out {
            info!("User logged out");
        }
    }

    /// Returns the signed-in user, if any.
    pub fn current_user(&self) -> Option<User> {
        self.state.borrow().current_user.clone()
    }

    /// Returns whether a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated
    }
}

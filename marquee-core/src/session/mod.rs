//! Session lifecycle: a reducer-driven store over a durable vault.
//!
//! This is demo authentication, not security: one hard-coded credential
//! pair, no token expiry, no server round-trip. What is pinned down
//! precisely is the lifecycle — rehydration, the loading window during an
//! attempt, and the guarantee that malformed persisted data demotes to
//! anonymous instead of failing.

pub mod vault;

use std::time::Duration;

use marquee_model::{AuthAction, AuthState, Session};
use tracing::warn;
use uuid::Uuid;

use crate::config::SessionConfig;
use vault::{FileVault, SessionVault};

/// Email half of the demo credential pair accepted by [`SessionStore::login`]
pub const DEMO_EMAIL: &str = "user@example.com";
/// Password half of the demo credential pair
pub const DEMO_PASSWORD: &str = "password";

const DEMO_SESSION_ID: &str = "1";
const DEMO_DISPLAY_NAME: &str = "Demo User";

/// Owner of the authentication state machine and its persisted mirror.
///
/// At most one transition is in flight per store instance; the vault is
/// only ever written by this store. Pass the store (or a handle to it) into
/// whichever views need it rather than holding it as process-wide state.
#[derive(Debug)]
pub struct SessionStore<V> {
    vault: V,
    latency: Duration,
    state: AuthState,
}

impl SessionStore<FileVault> {
    /// File-backed store per the given configuration
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(
            FileVault::new(config.storage_path.clone()),
            config.simulated_latency,
        )
    }
}

impl<V: SessionVault> SessionStore<V> {
    pub fn new(vault: V, latency: Duration) -> Self {
        Self {
            vault,
            latency,
            state: AuthState::unknown(),
        }
    }

    /// Current observable state
    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// Rehydrate from the vault.
    ///
    /// Absent slot: anonymous. Well-formed record: authenticated with that
    /// session. Anything else — unreadable vault, unparseable JSON, record
    /// with an empty id or email — clears the slot and lands anonymous.
    /// Nothing here errors out; malformed local data must never take down
    /// startup.
    pub fn initialize(&mut self) {
        let raw = match self.vault.load() {
            Ok(raw) => raw,
            Err(error) => {
                warn!(%error, "session vault unreadable, treating as absent");
                self.clear_vault();
                self.transition(AuthAction::SignedOut);
                return;
            }
        };

        let Some(raw) = raw else {
            self.transition(AuthAction::SignedOut);
            return;
        };

        match serde_json::from_str::<Session>(&raw) {
            Ok(session) if session.is_well_formed() => {
                self.transition(AuthAction::SignedIn(session));
            }
            Ok(_) => {
                warn!("persisted session missing id or email, clearing");
                self.clear_vault();
                self.transition(AuthAction::SignedOut);
            }
            Err(error) => {
                warn!(%error, "persisted session malformed, clearing");
                self.clear_vault();
                self.transition(AuthAction::SignedOut);
            }
        }
    }

    /// Attempt a login against the demo credential pair.
    ///
    /// Suspends for the configured simulated latency before deciding.
    /// "Unknown user" and "wrong password" are deliberately
    /// indistinguishable; both are just `false`.
    pub async fn login(&mut self, email: &str, password: &str) -> bool {
        self.transition(AuthAction::AttemptStarted);
        tokio::time::sleep(self.latency).await;

        if email != DEMO_EMAIL || password != DEMO_PASSWORD {
            self.transition(AuthAction::AttemptFailed);
            return false;
        }

        let session = Session {
            id: DEMO_SESSION_ID.to_string(),
            email: email.to_string(),
            display_name: Some(DEMO_DISPLAY_NAME.to_string()),
        };
        self.complete_attempt(session)
    }

    /// Create a local account unconditionally: fresh unique id, the
    /// supplied email and name. No uniqueness check (there is nothing to
    /// check against) and no password policy at this layer.
    pub async fn signup(&mut self, email: &str, _password: &str, name: &str) -> bool {
        self.transition(AuthAction::AttemptStarted);
        tokio::time::sleep(self.latency).await;

        let session = Session {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            display_name: (!name.is_empty()).then(|| name.to_string()),
        };
        self.complete_attempt(session)
    }

    /// Clear the vault and land anonymous, regardless of prior state.
    /// Synchronous and idempotent.
    pub fn logout(&mut self) {
        self.clear_vault();
        self.transition(AuthAction::SignedOut);
    }

    fn complete_attempt(&mut self, session: Session) -> bool {
        let raw = match serde_json::to_string(&session) {
            Ok(raw) => raw,
            Err(error) => {
                warn!(%error, "session record failed to serialize");
                self.transition(AuthAction::AttemptFailed);
                return false;
            }
        };
        if let Err(error) = self.vault.store(&raw) {
            warn!(%error, "session record failed to persist");
            self.transition(AuthAction::AttemptFailed);
            return false;
        }
        self.transition(AuthAction::SignedIn(session));
        true
    }

    fn transition(&mut self, action: AuthAction) {
        self.state = self.state.clone().apply(action);
    }

    fn clear_vault(&mut self) {
        if let Err(error) = self.vault.clear() {
            warn!(%error, "session vault failed to clear");
        }
    }
}

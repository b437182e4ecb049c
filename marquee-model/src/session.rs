//! Session identity and the pure authentication state machine.
//!
//! The store that drives these types lives in `marquee-core`; everything
//! here is IO-free so the transition rules can be tested in isolation.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Locally-asserted identity of the current user.
///
/// This is demo-grade state, not a cryptographic credential: it is exactly
/// what was written to the persisted slot at login/signup time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque identifier, unique per created session
    pub id: String,
    /// Email the session was created with
    pub email: String,
    /// Optional display name
    #[serde(rename = "name", default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl Session {
    /// A persisted record that parses but carries an empty id or email is
    /// treated the same as one that does not parse at all.
    pub fn is_well_formed(&self) -> bool {
        !self.id.is_empty() && !self.email.is_empty()
    }
}

impl Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.display_name {
            Some(name) => write!(f, "{name} <{}>", self.email),
            None => write!(f, "<{}>", self.email),
        }
    }
}

/// Observable phases of the session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPhase {
    /// Initial phase, before the persisted slot has been checked
    Unknown,
    /// A session check or login/signup attempt is in flight
    Loading,
    /// A session is present
    Authenticated,
    /// No session
    Anonymous,
}

impl Display for AuthPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthPhase::Unknown => write!(f, "Unknown"),
            AuthPhase::Loading => write!(f, "Loading"),
            AuthPhase::Authenticated => write!(f, "Authenticated"),
            AuthPhase::Anonymous => write!(f, "Anonymous"),
        }
    }
}

/// Actions accepted by the transition function
#[derive(Debug, Clone, PartialEq)]
pub enum AuthAction {
    /// A login or signup attempt began
    AttemptStarted,
    /// A login/signup attempt or rehydration produced a session
    SignedIn(Session),
    /// A login attempt failed
    AttemptFailed,
    /// Explicit logout, or rehydration found nothing usable
    SignedOut,
}

/// Snapshot of authentication state exposed to the rest of the system.
///
/// Fields are private so the only way state advances is through
/// [`AuthState::apply`]; that keeps the session-presence invariant with
/// the phase by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    phase: AuthPhase,
    session: Option<Session>,
}

impl AuthState {
    /// The initial state, before the persisted slot has been checked
    pub fn unknown() -> Self {
        Self {
            phase: AuthPhase::Unknown,
            session: None,
        }
    }

    pub fn phase(&self) -> AuthPhase {
        self.phase
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Always `session().is_some()`; the two can never disagree.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// True only while a check or login/signup attempt is in flight
    pub fn is_loading(&self) -> bool {
        self.phase == AuthPhase::Loading
    }

    /// Explicit transition function. Consumes the current state and yields
    /// the next one; there is no other way to move between phases.
    #[must_use]
    pub fn apply(self, action: AuthAction) -> AuthState {
        match action {
            AuthAction::AttemptStarted => AuthState {
                phase: AuthPhase::Loading,
                session: None,
            },
            AuthAction::SignedIn(session) => AuthState {
                phase: AuthPhase::Authenticated,
                session: Some(session),
            },
            AuthAction::AttemptFailed | AuthAction::SignedOut => AuthState {
                phase: AuthPhase::Anonymous,
                session: None,
            },
        }
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::unknown()
    }
}

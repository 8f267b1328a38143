//! Admin session gate.
//!
//! A single implicit operator identity behind a static shared secret and
//! a boolean flag in per-tab storage. This is a placeholder trust
//! boundary for a single-operator tool: the secret is compared in plain
//! text, there is no lockout or rate limiting, and the flag expires only
//! with the tab. Real deployment needs hashed credentials, session
//! expiry and brute-force protection before this guards anything that
//! matters.

use thiserror::Error;

use super::store::StorageBackend;

/// Per-tab storage key holding `"true"` once the operator has signed in.
pub const SESSION_FLAG_KEY: &str = "isAdmin";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Deliberately undetailed: the caller learns that the credentials
    /// were wrong, not which part of them.
    #[error("invalid credentials")]
    InvalidCredentials,
}

pub struct SessionGate<B: StorageBackend> {
    backend: B,
    secret: String,
}

impl<B: StorageBackend> SessionGate<B> {
    pub fn new(backend: B, secret: impl Into<String>) -> Self {
        SessionGate {
            backend,
            secret: secret.into(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.backend.load(SESSION_FLAG_KEY).as_deref() == Some("true")
    }

    /// Compares `candidate` against the shared secret. On match the
    /// per-tab flag is set; on mismatch the gate state is untouched.
    pub fn authenticate(&self, candidate: &str) -> Result<(), AuthError> {
        if candidate != self.secret {
            return Err(AuthError::InvalidCredentials);
        }
        if let Err(err) = self.backend.store(SESSION_FLAG_KEY, "true") {
            log::warn!("session flag not persisted: {err}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::store::MemoryBackend;

    const SECRET: &str = "changeme123";

    #[test]
    fn correct_secret_authenticates() {
        let gate = SessionGate::new(MemoryBackend::new(), SECRET);
        assert!(!gate.is_authenticated());
        assert_eq!(gate.authenticate(SECRET), Ok(()));
        assert!(gate.is_authenticated());
    }

    #[test]
    fn wrong_secret_is_rejected_without_detail() {
        let gate = SessionGate::new(MemoryBackend::new(), SECRET);
        assert_eq!(gate.authenticate("changeme12"), Err(AuthError::InvalidCredentials));
        assert_eq!(gate.authenticate(""), Err(AuthError::InvalidCredentials));
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn flag_is_visible_through_a_fresh_gate_on_the_same_tab() {
        let backend = MemoryBackend::new();
        SessionGate::new(backend.clone(), SECRET)
            .authenticate(SECRET)
            .unwrap();
        assert!(SessionGate::new(backend, SECRET).is_authenticated());
    }
}

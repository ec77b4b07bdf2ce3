//! Bearer-token session state shared with the client.

use std::sync::{Arc, RwLock};

/// Holds the access token for authenticated requests.
///
/// Injected into [`crate::Client`] instead of being read from ambient storage,
/// so tests and non-browser callers can control it explicitly. Cloning is
/// cheap and clones share the same token cell, which lets a `login` call
/// store the token through a shared handle.
#[derive(Clone, Default)]
pub struct Session {
    token: Arc<RwLock<Option<String>>>,
}

impl Session {
    /// Creates an unauthenticated session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session pre-loaded with a token (e.g. from an env var).
    pub fn with_token(token: impl Into<String>) -> Self {
        let session = Self::new();
        session.set_token(token);
        session
    }

    /// Stores the access token. Replaces any previous token.
    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = Some(token.into());
    }

    /// Clears the stored token (logout).
    pub fn clear(&self) {
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = None;
    }

    /// Returns a copy of the current token, if any.
    pub fn token(&self) -> Option<String> {
        self.token.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// True when a token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::Session;

    #[test]
    fn clones_share_the_token_cell() {
        let a = Session::new();
        let b = a.clone();
        assert!(!b.is_authenticated());

        a.set_token("tok-123");
        assert_eq!(b.token().as_deref(), Some("tok-123"));

        b.clear();
        assert!(!a.is_authenticated());
    }
}

//! Time-boxed, single-use CSRF state tokens for the SSO handshake.
//!
//! The handshake itself lives outside this crate. What it needs from us is a
//! store mapping a random token to its creation time, with
//! sweep-then-consume discipline. The store is injected wherever it is used
//! rather than held as process-wide state.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};

use jiff::{SignedDuration, Timestamp};
use log::debug;
use uuid::Uuid;

use crate::error::{CockpitError, Result};

/// How long an issued state token stays valid.
pub const DEFAULT_STATE_TTL: SignedDuration = SignedDuration::from_mins(10);

/// Key-value store of state tokens and their creation times.
pub trait StateStore: Send + Sync {
    /// Records `token` as created at `now` and returns that creation time.
    /// Re-allocating an existing token resets its creation time.
    fn allocate_at(&self, token: &str, now: Timestamp) -> Timestamp;

    /// Records `token` as created now.
    fn allocate(&self, token: &str) -> Timestamp {
        self.allocate_at(token, Timestamp::now())
    }

    /// Removes `token` and returns its creation time, if it was present.
    fn consume(&self, token: &str) -> Option<Timestamp>;

    /// Drops every token older than `ttl` as of `now`. Returns how many were
    /// dropped.
    fn sweep(&self, now: Timestamp, ttl: SignedDuration) -> usize;
}

/// In-process [`StateStore`].
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    states: Mutex<HashMap<String, Timestamp>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live tokens.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic while holding the lock cannot leave the map half-updated, so a
    // poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Timestamp>> {
        self.states
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl StateStore for MemoryStateStore {
    fn allocate_at(&self, token: &str, now: Timestamp) -> Timestamp {
        self.lock().insert(token.to_string(), now);
        now
    }

    fn consume(&self, token: &str) -> Option<Timestamp> {
        self.lock().remove(token)
    }

    fn sweep(&self, now: Timestamp, ttl: SignedDuration) -> usize {
        let mut states = self.lock();
        let before = states.len();
        states.retain(|_, created_at| now.duration_since(*created_at) <= ttl);
        before - states.len()
    }
}

/// Issues and verifies state tokens against a [`StateStore`].
#[derive(Clone)]
pub struct CsrfGuard {
    store: Arc<dyn StateStore>,
    ttl: SignedDuration,
}

impl CsrfGuard {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self {
            store,
            ttl: DEFAULT_STATE_TTL,
        }
    }

    pub fn with_ttl(mut self, ttl: SignedDuration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Allocates a fresh random token created at `now`.
    pub fn issue_at(&self, now: Timestamp) -> String {
        let token = Uuid::new_v4().simple().to_string();
        self.store.allocate_at(&token, now);
        token
    }

    pub fn issue(&self) -> String {
        self.issue_at(Timestamp::now())
    }

    /// Sweeps expired tokens, then consumes `token`.
    ///
    /// # Errors
    ///
    /// Returns `CockpitError::InvalidState` if the token is unknown, was
    /// already consumed, or has expired.
    pub fn verify(&self, token: &str, now: Timestamp) -> Result<Timestamp> {
        let swept = self.store.sweep(now, self.ttl);
        if swept > 0 {
            debug!("Swept {swept} expired state token(s)");
        }
        self.store
            .consume(token)
            .ok_or_else(|| CockpitError::InvalidState {
                reason: "unknown, reused or expired state token".to_string(),
            })
    }
}

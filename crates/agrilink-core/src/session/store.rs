//! Session store port.
//!
//! Defines the interface for session persistence plus an in-memory
//! implementation. The file-backed store lives in the infrastructure
//! crate.

use super::model::Session;
use anyhow::Result;
use std::sync::RwLock;

/// An abstract store for the single login session.
///
/// This trait decouples session handling from the storage mechanism
/// (JSON file, in-memory, embedder-provided). Operations are synchronous;
/// the record is tiny and has a single writer.
///
/// # Implementation Notes
///
/// - `read` must never error: a missing, unreadable, or partial record
///   counts as "not logged in".
/// - `write` replaces the record wholesale and must be atomic from a
///   reader's perspective.
/// - `clear` is unconditional and succeeds when nothing is stored.
pub trait SessionStore: Send + Sync {
    /// Returns the current session, or `None` when no usable session
    /// exists.
    fn read(&self) -> Option<Session>;

    /// Replaces the stored session wholesale.
    fn write(&self, session: &Session) -> Result<()>;

    /// Removes the stored session.
    fn clear(&self) -> Result<()>;

    /// Returns the bearer token of the current session, if any.
    ///
    /// An empty token counts as absent so a corrupt record can never
    /// produce a blank `Bearer` header.
    fn current_token(&self) -> Option<String> {
        self.read()
            .map(|session| session.access_token)
            .filter(|token| !token.is_empty())
    }
}

/// In-memory session store.
///
/// Used by tests and by hosts that keep the session for the lifetime of
/// the process only.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: RwLock<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn read(&self) -> Option<Session> {
        // A poisoned lock still holds a valid record for this store.
        self.session
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn write(&self, session: &Session) -> Result<()> {
        *self.session.write().unwrap_or_else(|e| e.into_inner()) = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.session.write().unwrap_or_else(|e| e.into_inner()) = None;
        Ok(())
    }
}

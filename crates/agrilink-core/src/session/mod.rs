//! Session domain module.
//!
//! Everything the client persists locally lives here: the session record
//! handed out by the auth endpoints, the storage port it is kept behind,
//! and an in-memory store for hosts without a filesystem.

mod model;
mod store;

// Re-export public API
pub use model::{Session, UserAccount};
pub use store::{MemorySessionStore, SessionStore};

//! Farm profile domain module.
//!
//! The profile record is owned by the server; the client fetches
//! snapshots, submits updates, and derives the completeness read-model
//! from whatever snapshot it last saw.

mod completeness;
mod model;

// Re-export public API
pub use completeness::completeness;
pub use model::{FarmProfile, LocationUpdate, Season, SoilFarmUpdate};

pub mod paths;
pub mod session_store;

pub use crate::paths::AgrilinkPaths;
pub use crate::session_store::FileSessionStore;

//! Session state module
//!
//! This module provides the session storage capability and the helpers that
//! check, store and clear the logged-in identity.

pub mod session;
pub mod storage;

pub use session::SessionManager;
pub use storage::{FileSessionStorage, MemorySessionStorage, SessionStorage};

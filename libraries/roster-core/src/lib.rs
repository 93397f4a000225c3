//! Roster Core
//!
//! Platform-agnostic domain types, traits, and error handling for the Roster
//! user directory service.
//!
//! The core crate defines:
//! - **Domain Types**: `UserRecord`, `Role`, `CreateUser`, `UpdateUser`
//! - **Core Traits**: `UserRepository`, `TokenVerifier`
//! - **Session Handling**: `SessionManager` and its cookie instructions
//! - **Error Handling**: Unified `RosterError` and `Result` types

#![forbid(unsafe_code)]

pub mod error;
pub mod session;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{Result, RosterError};
pub use session::{ClearedSession, SessionManager, SessionTicket, TokenVerifier, VerifiedIdentity};
pub use store::{MemoryStore, UserRepository};
pub use types::{CreateUser, Role, UpdateUser, UserRecord};

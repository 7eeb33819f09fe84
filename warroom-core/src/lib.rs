//! Core library for War Room.
//!
//! This crate provides the domain models, the [`Storage`] facade and its
//! in-memory implementation, independent of any transport layer (HTTP, MCP, etc.).
//!
//! # Usage
//!
//! ```
//! use warroom_core::models::*;
//! use warroom_core::{MemStorage, Storage};
//!
//! let storage = MemStorage::new();
//! let user = storage.create_user(CreateUserInput {
//!     username: "demo".into(),
//!     email: None,
//!     biometric_enabled: false,
//!     metadata: Metadata::new(),
//! })?;
//!
//! let notes = storage.get_sticky_notes(user.id)?;
//! assert!(notes.is_empty());
//! # Ok::<(), warroom_core::StorageError>(())
//! ```

pub mod audit;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod storage;

// Re-export commonly used types at crate root
pub use error::{StorageError, StorageResult, ValidationError};
pub use storage::{MemStorage, Storage};

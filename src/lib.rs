//! War Room: REST and MCP surfaces over the in-memory store.
//!
//! The domain models and storage live in `warroom-core`; this crate wires
//! them to transports.

pub mod api;
pub mod config;
pub mod mcp;

// Re-export core types for convenience
pub use warroom_core::{audit, fixtures, models, MemStorage, Storage, StorageError};

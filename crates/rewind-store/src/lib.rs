//! Object-store access for Rewind.
//!
//! Recorded sessions live as compressed objects in a remote key-addressed
//! store. This crate owns everything between a [`StorageKey`] and a complete
//! in-memory byte buffer:
//!
//! - [`ObjectFetch`] — the narrow seam a retrieval flow depends on. The
//!   production backend is [`S3ObjectStore`]; tests and embedders use
//!   [`MemoryObjectStore`]. The client is constructed explicitly and passed
//!   in, never reached through a module-level singleton.
//! - [`collect_chunks`] — aggregates an object's chunk stream into one
//!   buffer, all-or-nothing.
//!
//! [`StorageKey`]: rewind_types::StorageKey

pub mod config;
pub mod error;
pub mod memory;
pub mod s3;
pub mod stream;
pub mod traits;

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use memory::MemoryObjectStore;
pub use s3::S3ObjectStore;
pub use stream::collect_chunks;
pub use traits::{ByteChunks, ObjectFetch};

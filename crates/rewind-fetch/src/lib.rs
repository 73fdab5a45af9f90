//! Retrieval orchestration for Rewind.
//!
//! [`Retriever`] is the public entry point of the system: given a
//! [`SessionRef`] it derives the storage key, fetches the compressed object
//! through the store seam, aggregates the body stream, and inflates it back
//! into the original event-log text. The operation either returns the fully
//! reconstructed payload or a typed [`RetrieveError`] — never a truncated or
//! best-effort result.
//!
//! [`SessionRef`]: rewind_types::SessionRef

pub mod error;
pub mod retriever;

pub use error::{RetrieveError, RetrieveResult};
pub use retriever::Retriever;

//! Foundation types for Rewind.
//!
//! This crate provides the identifier types shared by every other Rewind
//! crate:
//!
//! - [`SessionRef`] — caller-supplied (project, session) pair naming one
//!   recorded session's event log
//! - [`StorageKey`] — deterministic object-store key derived from a
//!   [`SessionRef`]

pub mod session;

pub use session::{SessionRef, StorageKey, SESSION_CONTENTS_OBJECT};

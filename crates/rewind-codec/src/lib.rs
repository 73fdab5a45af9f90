//! Brotli codec for Rewind session payloads.
//!
//! Session event logs are stored as Brotli-compressed UTF-8 text. This crate
//! is the single place that knows the codec: [`decompress_text`] recovers the
//! original text on the read path, and [`compress`] is the matching writer
//! half used by tests and by embedders that seed a store.
//!
//! There is exactly one codec and no format detection. A payload that does
//! not inflate, or that inflates to something other than valid UTF-8, is
//! corrupt — never silently repaired.

pub mod brotli_codec;
pub mod error;

pub use brotli_codec::{compress, decompress, decompress_text};
pub use error::{CodecError, CodecResult};

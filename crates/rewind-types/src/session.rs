use std::fmt;

use serde::{Deserialize, Serialize};

/// Object name shared with the writer side. The key format must match the
/// writer exactly or lookups silently miss.
pub const SESSION_CONTENTS_OBJECT: &str = "session-contents-compressed";

/// Identifier pair naming one recorded session's event log.
///
/// Both fields are unsigned, so the non-negativity invariant is carried by
/// the type. There is no defaulting: a `SessionRef` only exists once a
/// caller supplies both halves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionRef {
    pub project: u64,
    pub session: u64,
}

impl SessionRef {
    pub fn new(project: u64, session: u64) -> Self {
        Self { project, session }
    }

    /// Derive the object-store key for this session's compressed contents.
    ///
    /// Pure: the same `SessionRef` always yields the same key.
    pub fn storage_key(&self) -> StorageKey {
        StorageKey(format!(
            "{}/{}/{}",
            self.project, self.session, SESSION_CONTENTS_OBJECT
        ))
    }
}

impl fmt::Display for SessionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.project, self.session)
    }
}

/// Deterministic object-store key locating one session's compressed payload.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StorageKey(String);

impl StorageKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StorageKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_derivation_matches_writer_format() {
        let key = SessionRef::new(4, 101).storage_key();
        assert_eq!(key.as_str(), "4/101/session-contents-compressed");
    }

    #[test]
    fn key_derivation_is_deterministic() {
        let session = SessionRef::new(10, 55);
        assert_eq!(session.storage_key(), session.storage_key());
        assert_eq!(
            session.storage_key().as_str(),
            "10/55/session-contents-compressed"
        );
    }

    #[test]
    fn decimal_rendering_has_no_leading_zeros() {
        let key = SessionRef::new(0, 7).storage_key();
        assert_eq!(key.as_str(), "0/7/session-contents-compressed");

        let key = SessionRef::new(1_000_000, 42).storage_key();
        assert_eq!(key.as_str(), "1000000/42/session-contents-compressed");
    }

    #[test]
    fn distinct_sessions_produce_distinct_keys() {
        let a = SessionRef::new(1, 2).storage_key();
        let b = SessionRef::new(2, 1).storage_key();
        assert_ne!(a, b);
    }

    #[test]
    fn session_ref_display() {
        assert_eq!(SessionRef::new(10, 55).to_string(), "10/55");
    }

    #[test]
    fn session_ref_serde_round_trip() {
        let session = SessionRef::new(4, 101);
        let json = serde_json::to_string(&session).unwrap();
        let back: SessionRef = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }
}

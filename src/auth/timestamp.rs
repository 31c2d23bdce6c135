//! Request timestamp generation for Ionomy API authentication.
//!
//! Every authenticated request is signed over a fresh Unix timestamp
//! which is also sent in the `api-auth-time` header. Timestamps are
//! generated at the moment of signing and never cached or reused.

use std::time::{SystemTime, UNIX_EPOCH};

/// Trait for providing the timestamp signed into each request.
///
/// The default implementation reads the system clock. Substituting a
/// fixed provider makes auth headers reproducible in tests.
pub trait TimestampProvider: Send + Sync {
    /// Current Unix time in whole seconds.
    fn unix_timestamp(&self) -> i64;
}

/// Timestamp provider backed by the system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTimestamp;

impl TimestampProvider for SystemTimestamp {
    fn unix_timestamp(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_timestamp_is_current() {
        let ts = SystemTimestamp.unix_timestamp();
        // Well after 2020-01-01.
        assert!(ts > 1_577_836_800);
    }

    #[test]
    fn test_system_timestamp_does_not_go_backwards() {
        let first = SystemTimestamp.unix_timestamp();
        let second = SystemTimestamp.unix_timestamp();
        assert!(second >= first);
    }
}

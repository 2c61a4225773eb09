//! Coding parameters.

use serde::{Deserialize, Serialize};

use crate::Error;

/// The minimal allowed shard size.
pub const MIN_SHARD_BYTES: u16 = 2;

/// The maximal allowed shard size, the largest even `u16`.
pub const MAX_SHARD_BYTES: u16 = u16::MAX - 1;

/// The erasure coding parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Params {
    /// The amount of original shards.
    pub original_count: u16,
    /// The amount of recovery shards.
    pub recovery_count: u16,
    /// The size of each shard in bytes.
    pub shard_bytes: u16,
}

impl Params {
    /// Create new validated [`Params`].
    pub fn new(original_count: u16, recovery_count: u16, shard_bytes: u16) -> Result<Self, Error> {
        let params = Self {
            original_count,
            recovery_count,
            shard_bytes,
        };
        params.validate()?;
        Ok(params)
    }

    /// Pick the smallest shard size that lets `data_len` bytes fit into the original shards.
    pub fn for_data_len(
        original_count: u16,
        recovery_count: u16,
        data_len: u64,
    ) -> Result<Self, Error> {
        if original_count == 0 {
            return Err(Error::InvalidParams("original count must not be zero"));
        }

        let too_large = Error::DataTooLarge {
            data_len,
            capacity: u64::from(original_count) * u64::from(MAX_SHARD_BYTES),
        };

        let per_shard = data_len.div_ceil(u64::from(original_count));
        if per_shard > u64::from(MAX_SHARD_BYTES) {
            return Err(too_large);
        }

        // Shards must be even-sized; cannot overflow after the bound check above.
        let per_shard = per_shard.next_multiple_of(2).max(u64::from(MIN_SHARD_BYTES));
        let shard_bytes = u16::try_from(per_shard).map_err(|_| too_large)?;

        Self::new(original_count, recovery_count, shard_bytes)
    }

    /// Check the invariants.
    pub fn validate(&self) -> Result<(), Error> {
        if self.original_count == 0 {
            return Err(Error::InvalidParams("original count must not be zero"));
        }
        if self.recovery_count == 0 {
            return Err(Error::InvalidParams("recovery count must not be zero"));
        }
        if self.shard_bytes == 0 || self.shard_bytes % 2 != 0 {
            return Err(Error::InvalidParams("shard bytes must be a non-zero multiple of 2"));
        }
        Ok(())
    }

    /// The total amount of shards, original and recovery.
    pub fn total_count(&self) -> u32 {
        u32::from(self.original_count) + u32::from(self.recovery_count)
    }

    /// The amount of payload bytes the original shards can carry.
    pub fn capacity(&self) -> u64 {
        u64::from(self.original_count) * u64::from(self.shard_bytes)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn validation() {
        let tests = [
            // Ok
            (1, 1, 2, true),
            (3, 2, 64, true),
            (u16::MAX, 1, 2, true),
            // Errors
            (0, 1, 2, false),
            (1, 0, 2, false),
            (1, 1, 0, false),
            (1, 1, 3, false),
            (1, 1, u16::MAX, false),
        ];

        for (original_count, recovery_count, shard_bytes, ok) in tests {
            let actual = Params::new(original_count, recovery_count, shard_bytes);
            assert_eq!(
                actual.is_ok(),
                ok,
                "{} {} {}",
                original_count,
                recovery_count,
                shard_bytes
            );
        }
    }

    #[test]
    fn for_data_len_picks_smallest_even_size() {
        let tests = [
            (4, 0, 2),
            (4, 1, 2),
            (4, 8, 2),
            (4, 9, 4),
            (3, 10, 4),
            (1, 7, 8),
            (2, 1024, 512),
        ];

        for (original_count, data_len, expected) in tests {
            let params = Params::for_data_len(original_count, 2, data_len).unwrap();
            assert_eq!(params.shard_bytes, expected, "{original_count} {data_len}");
            assert!(params.capacity() >= data_len);
        }
    }

    #[test]
    fn for_data_len_too_large() {
        let tests = [
            (1, 65_535),
            (1, 70_000),
            (1, u64::MAX),
            (2, 2 * 65_534 + 1),
            (u16::MAX, u64::MAX),
        ];

        for (original_count, data_len) in tests {
            let expected_capacity = u64::from(original_count) * u64::from(MAX_SHARD_BYTES);
            assert_eq!(
                Params::for_data_len(original_count, 1, data_len),
                Err(Error::DataTooLarge {
                    data_len,
                    capacity: expected_capacity,
                }),
                "{original_count} {data_len}"
            );
        }
    }

    #[test]
    fn for_data_len_largest_fit() {
        let tests = [(1, 65_533), (1, 65_534), (2, 2 * 65_534)];

        for (original_count, data_len) in tests {
            let params = Params::for_data_len(original_count, 1, data_len).unwrap();
            assert_eq!(params.shard_bytes, MAX_SHARD_BYTES, "{original_count} {data_len}");
            assert!(params.capacity() >= data_len);
        }
    }

    #[test]
    fn for_data_len_zero_originals() {
        assert_matches!(
            Params::for_data_len(0, 1, 10),
            Err(Error::InvalidParams(_))
        );
    }

    #[test]
    fn total_count_does_not_overflow() {
        let params = Params::new(u16::MAX, u16::MAX, 2).unwrap();
        assert_eq!(params.total_count(), 2 * u32::from(u16::MAX));
    }

    #[test]
    fn serde_parse() {
        let val = r#"{"originalCount": 4, "recoveryCount": 2, "shardBytes": 64}"#;
        let val: Params = serde_json::from_str(val).unwrap();
        assert_eq!(
            val,
            Params {
                original_count: 4,
                recovery_count: 2,
                shard_bytes: 64,
            }
        );
    }

    #[test]
    #[should_panic = "unknown field `unknown_field`"]
    fn serde_parse_does_not_allow_unknown_fields() {
        let val = r#"{"originalCount": 4, "recoveryCount": 2, "shardBytes": 64, "unknown_field": 1}"#;
        let _: Params = serde_json::from_str(val).unwrap();
    }
}

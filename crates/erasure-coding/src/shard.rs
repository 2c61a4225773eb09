//! Indexed shards.

use crate::{Error, Params, RawShard};

/// A shard together with its global index.
///
/// Indices below `original_count` denote original shards, the rest denote recovery shards
/// offset by `original_count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shard {
    /// The global index of the shard.
    pub index: u16,
    /// The shard bytes.
    pub data: RawShard,
}

/// The position of a shard within its own set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShardKind {
    /// An original shard, with the index among the originals.
    Original(usize),
    /// A recovery shard, with the index among the recovery shards.
    Recovery(usize),
}

impl Shard {
    /// Create a new [`Shard`].
    pub fn new(index: u16, data: RawShard) -> Self {
        Self { index, data }
    }

    /// Figure out which set the shard belongs to under the given params.
    pub fn kind(&self, params: &Params) -> Result<ShardKind, Error> {
        let index = usize::from(self.index);
        let original_count = usize::from(params.original_count);

        if index < original_count {
            return Ok(ShardKind::Original(index));
        }

        let recovery_index = index - original_count;
        if recovery_index >= usize::from(params.recovery_count) {
            return Err(Error::ShardIndexOutOfRange {
                index: self.index,
                total_count: params.total_count(),
            });
        }

        Ok(ShardKind::Recovery(recovery_index))
    }
}

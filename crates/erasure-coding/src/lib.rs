//! Reed-Solomon erasure coding over equally sized shards.
//!
//! The payload is cut into `original_count` original shards, and `recovery_count`
//! recovery shards are computed from them. Any `original_count` shards out of the
//! total are enough to restore the originals.

#![warn(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::clone_on_ref_ptr
)]

pub mod chunking;
pub mod decode;
pub mod encode;
pub mod params;
pub mod shard;

pub use chunking::{join, split};
pub use decode::{decode, reconstruct};
pub use encode::encode;
pub use params::Params;
pub use shard::{Shard, ShardKind};

/// The raw bytes of a single shard.
pub type RawShard = Vec<u8>;

/// The erasure coding error.
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum Error {
    /// The coding parameters are not usable.
    #[error("invalid params: {0}")]
    InvalidParams(&'static str),
    /// The shard index does not belong to either the original or the recovery set.
    #[error("shard index {index} is out of range, total shard count is {total_count}")]
    ShardIndexOutOfRange {
        /// The offending index.
        index: u16,
        /// The total amount of shards.
        total_count: u32,
    },
    /// The data does not fit into the original shards.
    #[error("data of {data_len} bytes does not fit into {capacity} bytes")]
    DataTooLarge {
        /// The length of the data.
        data_len: u64,
        /// The amount of bytes available.
        capacity: u64,
    },
    /// The underlying codec failed.
    #[error(transparent)]
    Codec(#[from] reed_solomon_simd::Error),
}

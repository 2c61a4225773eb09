//! Encoding.

use reed_solomon_simd::ReedSolomonEncoder;
use tracing::trace;

use crate::{Error, Params, RawShard};

/// Compute the recovery shards for the given original shards.
///
/// Exactly `original_count` shards of `shard_bytes` each must be passed.
/// The recovery shards are returned in the recovery index order.
pub fn encode<T>(params: &Params, originals: &[T]) -> Result<Vec<RawShard>, Error>
where
    T: AsRef<[u8]>,
{
    params.validate()?;

    let mut encoder = ReedSolomonEncoder::new(
        usize::from(params.original_count),
        usize::from(params.recovery_count),
        usize::from(params.shard_bytes),
    )?;

    for shard in originals {
        encoder.add_original_shard(shard)?;
    }

    let result = encoder.encode()?;
    let recovery: Vec<RawShard> = result.recovery_iter().map(|v| v.to_vec()).collect();

    trace!(
        message = "Encoded shards",
        original_count = params.original_count,
        recovery_count = recovery.len(),
        shard_bytes = params.shard_bytes,
    );

    Ok(recovery)
}

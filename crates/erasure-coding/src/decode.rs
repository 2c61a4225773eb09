//! Decoding.

use reed_solomon_simd::ReedSolomonDecoder;
use tracing::trace;

use crate::{Error, Params, RawShard, Shard, ShardKind};

/// A decoder fed with all of the available shards.
struct Prepared {
    /// The underlying decoder.
    decoder: ReedSolomonDecoder,
    /// Whether every original shard was provided.
    originals_complete: bool,
}

/// Route every shard to the decoder according to its index.
fn prepare(params: &Params, shards: &[Shard]) -> Result<Prepared, Error> {
    params.validate()?;

    let mut decoder = ReedSolomonDecoder::new(
        usize::from(params.original_count),
        usize::from(params.recovery_count),
        usize::from(params.shard_bytes),
    )?;

    // Duplicates are rejected by the decoder, so counting is enough.
    let mut originals_received = 0usize;
    for shard in shards {
        match shard.kind(params)? {
            ShardKind::Original(index) => {
                decoder.add_original_shard(index, &shard.data)?;
                originals_received += 1;
            }
            ShardKind::Recovery(index) => {
                decoder.add_recovery_shard(index, &shard.data)?;
            }
        }
    }

    Ok(Prepared {
        decoder,
        originals_complete: originals_received == usize::from(params.original_count),
    })
}

/// Restore the original shards missing from `shards`.
///
/// Only the restored originals are returned, each with its original index.
/// When all of the originals are provided nothing needs restoring and the result is empty.
pub fn decode(params: &Params, shards: &[Shard]) -> Result<Vec<Shard>, Error> {
    let Prepared {
        mut decoder,
        originals_complete,
    } = prepare(params, shards)?;

    if originals_complete {
        trace!(message = "All original shards present, nothing to restore");
        return Ok(Vec::new());
    }

    let result = decoder.decode()?;
    let restored: Vec<Shard> = result
        .restored_original_iter()
        .map(|(index, data)| {
            // The decoder never yields an index at or above `original_count`, which is a `u16`.
            let index = u16::try_from(index).expect("original index fits into u16; qed");
            Shard::new(index, data.to_vec())
        })
        .collect();

    trace!(
        message = "Decoded shards",
        received = shards.len(),
        restored = restored.len(),
    );

    Ok(restored)
}

/// Obtain every original shard, in order, from any sufficient subset of the shards.
pub fn reconstruct(params: &Params, shards: &[Shard]) -> Result<Vec<RawShard>, Error> {
    let restored = decode(params, shards)?;

    let mut originals: Vec<Option<RawShard>> = vec![None; usize::from(params.original_count)];

    // The decode above has range-checked every index and rejected duplicates.
    for shard in shards.iter().filter(|shard| shard.index < params.original_count) {
        originals[usize::from(shard.index)] = Some(shard.data.clone());
    }
    let original_received_count = originals.iter().filter(|shard| shard.is_some()).count();
    let recovery_received_count = shards.len() - original_received_count;

    for shard in restored {
        originals[usize::from(shard.index)] = Some(shard.data);
    }

    originals
        .into_iter()
        .map(|shard| {
            shard.ok_or(Error::Codec(reed_solomon_simd::Error::NotEnoughShards {
                original_count: usize::from(params.original_count),
                original_received_count,
                recovery_received_count,
            }))
        })
        .collect()
}

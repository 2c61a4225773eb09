//! Splitting arbitrary payloads into original shards, and joining them back.

use crate::{Error, Params, RawShard};

/// Cut `data` into `original_count` shards of `shard_bytes` each.
///
/// The tail is padded with zeroes.
pub fn split(data: &[u8], params: &Params) -> Result<Vec<RawShard>, Error> {
    params.validate()?;

    let data_len = data.len() as u64;
    let capacity = params.capacity();
    if data_len > capacity {
        return Err(Error::DataTooLarge { data_len, capacity });
    }

    let shard_bytes = usize::from(params.shard_bytes);
    let mut chunks = data.chunks(shard_bytes);

    let shards = (0..params.original_count)
        .map(|_| {
            let mut shard = vec![0u8; shard_bytes];
            if let Some(chunk) = chunks.next() {
                shard[..chunk.len()].copy_from_slice(chunk);
            }
            shard
        })
        .collect();

    Ok(shards)
}

/// Concatenate the original shards and drop the padding past `data_len`.
pub fn join<T>(originals: &[T], data_len: u64) -> Result<Vec<u8>, Error>
where
    T: AsRef<[u8]>,
{
    let capacity: u64 = originals
        .iter()
        .map(|shard| shard.as_ref().len() as u64)
        .sum();
    if data_len > capacity {
        return Err(Error::DataTooLarge { data_len, capacity });
    }

    // Fits, as it is bounded by the total length of slices already in memory.
    let data_len = data_len as usize;

    let mut data = Vec::with_capacity(data_len);
    for shard in originals {
        let remaining = data_len - data.len();
        if remaining == 0 {
            break;
        }
        let shard = shard.as_ref();
        data.extend_from_slice(&shard[..shard.len().min(remaining)]);
    }

    Ok(data)
}

//! Decode operation.

use anyhow::Context;
use erasure_coding::Shard;
use tracing::{debug, info, warn};

use crate::{
    cli::DecodeCmd,
    manifest::{shard_path, Manifest},
};

/// Restore the file from whichever shards are left in the input directory.
pub fn run(cmd: &DecodeCmd) -> anyhow::Result<()> {
    let Manifest { params, data_len } = Manifest::load(&cmd.input)?;

    let mut shards = Vec::new();
    for index in 0..params.total_count() {
        // Bounded by the validated `u16` counts, and the codec caps the total at 2^16.
        let index = u16::try_from(index).context("shard index overflow")?;
        let path = shard_path(&cmd.input, index);

        match std::fs::read(&path) {
            Ok(data) if data.len() != usize::from(params.shard_bytes) => {
                warn!(
                    message = "Shard has unexpected size, skipping",
                    index,
                    path = %path.display(),
                    expected = params.shard_bytes,
                    got = data.len(),
                );
            }
            Ok(data) => {
                debug!(message = "Read shard", index, path = %path.display());
                shards.push(Shard::new(index, data));
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                warn!(message = "Shard is missing", index, path = %path.display());
            }
            Err(err) => {
                return Err(err).with_context(|| format!("unable to read {}", path.display()))
            }
        }

        // Any `original_count` shards are enough.
        if shards.len() == usize::from(params.original_count) {
            break;
        }
    }

    let originals = erasure_coding::reconstruct(&params, &shards)?;
    let data = erasure_coding::join(&originals, data_len)?;

    std::fs::write(&cmd.output, &data)
        .with_context(|| format!("unable to write {}", cmd.output.display()))?;

    info!(message = "Decoded", data_len, shards_used = shards.len());

    Ok(())
}

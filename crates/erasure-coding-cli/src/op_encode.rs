//! Encode operation.

use anyhow::Context;
use erasure_coding::Params;
use tracing::{debug, info};

use crate::{
    cli::EncodeCmd,
    manifest::{shard_path, Manifest},
};

/// Encode the input file into the output shard directory.
pub fn run(cmd: &EncodeCmd) -> anyhow::Result<()> {
    let data = std::fs::read(&cmd.input)
        .with_context(|| format!("unable to read {}", cmd.input.display()))?;

    let data_len = data.len() as u64;
    let params = Params::for_data_len(cmd.original_count, cmd.recovery_count, data_len)?;

    let originals = erasure_coding::split(&data, &params)?;
    let recovery = erasure_coding::encode(&params, &originals)?;

    std::fs::create_dir_all(&cmd.output)
        .with_context(|| format!("unable to create {}", cmd.output.display()))?;

    for (index, shard) in originals.iter().chain(recovery.iter()).enumerate() {
        // The codec caps the total shard count at 2^16.
        let index = u16::try_from(index).context("shard index overflow")?;
        let path = shard_path(&cmd.output, index);
        debug!(message = "Writing shard", index, path = %path.display());
        std::fs::write(&path, shard)
            .with_context(|| format!("unable to write {}", path.display()))?;
    }

    Manifest { params, data_len }.store(&cmd.output)?;

    info!(
        message = "Encoded",
        data_len,
        original_count = params.original_count,
        recovery_count = params.recovery_count,
        shard_bytes = params.shard_bytes,
    );

    Ok(())
}

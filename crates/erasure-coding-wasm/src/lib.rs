//! WebAssembly bindings for the erasure coding.

#![warn(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::clone_on_ref_ptr
)]

use erasure_coding::Params;
use js_sys::Uint8Array;
use wasm_bindgen::prelude::wasm_bindgen;

/// A shard exposed to JS.
#[wasm_bindgen]
pub struct Shard {
    /// The shard index.
    index: u16,
    /// The shard bytes.
    data: Uint8Array,
}

#[wasm_bindgen]
impl Shard {
    /// Create a new [`Shard`].
    #[wasm_bindgen(constructor)]
    pub fn new(index: u16, data: Uint8Array) -> Shard {
        Shard { index, data }
    }

    /// The shard index.
    #[wasm_bindgen(getter)]
    pub fn index(&self) -> u16 {
        self.index
    }

    /// The shard bytes.
    #[wasm_bindgen(getter)]
    pub fn data(&self) -> Uint8Array {
        self.data.clone()
    }
}

impl Shard {
    /// Copy the shard into the Rust memory.
    fn to_core(&self) -> erasure_coding::Shard {
        erasure_coding::Shard::new(self.index, self.data.to_vec())
    }

    /// Copy the shard from the Rust memory.
    fn from_bytes(index: u16, data: &[u8]) -> Self {
        Self::new(index, data.into())
    }
}

/// Compute the recovery shards for the given original shards.
///
/// The returned shards are indexed within the recovery set, starting at zero.
#[wasm_bindgen]
pub fn encode(
    original_count: u16,
    recovery_count: u16,
    shard_bytes: u16,
    shards: Vec<Uint8Array>,
) -> Result<Vec<Shard>, String> {
    let params =
        Params::new(original_count, recovery_count, shard_bytes).map_err(|e| e.to_string())?;

    let originals: Vec<Vec<u8>> = shards.iter().map(Uint8Array::to_vec).collect();
    let recovery = erasure_coding::encode(&params, &originals).map_err(|e| e.to_string())?;

    recovery
        .iter()
        .enumerate()
        .map(|(index, data)| {
            let index = u16::try_from(index).map_err(|e| e.to_string())?;
            Ok(Shard::from_bytes(index, data))
        })
        .collect()
}

/// Restore the original shards that are missing from `shards`.
///
/// Input shards use the global index: originals first, then the recovery shards.
/// Only the restored originals are returned.
#[wasm_bindgen]
pub fn decode(
    original_count: u16,
    recovery_count: u16,
    shard_bytes: u16,
    shards: Vec<Shard>,
) -> Result<Vec<Shard>, String> {
    let params =
        Params::new(original_count, recovery_count, shard_bytes).map_err(|e| e.to_string())?;

    let shards: Vec<erasure_coding::Shard> = shards.iter().map(Shard::to_core).collect();
    let restored = erasure_coding::decode(&params, &shards).map_err(|e| e.to_string())?;

    Ok(restored
        .iter()
        .map(|shard| Shard::from_bytes(shard.index, &shard.data))
        .collect())
}

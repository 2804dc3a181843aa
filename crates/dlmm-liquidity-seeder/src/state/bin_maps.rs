use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Identifier of one price bin. Bins are contiguous and ordered by
/// increasing price; negative ids lie below the unit price.
pub type BinId = i32;

/// Exact per-bin deposit amounts in raw token units, at the base token's
/// full decimal precision. Keys cover `[min_bin_id, max_bin_id)` and values
/// sum exactly to the requested seed amount.
pub type ExactBinAmounts = BTreeMap<BinId, u128>;

/// Per-bin deposit amounts after fixed-point compression, in whole-token
/// units. After redistribution every value is bounded by the bin capacity.
pub type CompressedBinAmounts = BTreeMap<BinId, u128>;

/// Output of the fixed-point compressor.
///
/// Invariant: for every bin, `exact = compressed * multiplier + remainder`
/// with `remainder < multiplier`, and `compression_loss` is the sum of the
/// per-bin remainders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressionResult {
    pub compressed_bin_amount: CompressedBinAmounts,
    /// Raw units truncated away by compression, to be redistributed.
    pub compression_loss: u128,
}

/// Output of the loss redistributor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedistributionResult {
    pub compressed_bin_amount: CompressedBinAmounts,
    /// Raw units that could not be re-compressed into any bin. The caller
    /// applies this as a single uncompressed top-up deposit.
    pub residual_loss: u128,
}

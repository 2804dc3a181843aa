use serde::{Deserialize, Serialize};

use crate::components::position_layout::position_bin_windows;
use crate::error::DistributionError;
use crate::state::bin_maps::{BinId, CompressedBinAmounts};
use crate::utils::constants::MAX_BIN_PER_POSITION;

/// Final output of the seeding pipeline, ready for an external orchestrator
/// to turn into on-chain deposit instructions.
///
/// The orchestrator deposits `compressed_bins` (decompressing each value by
/// `decompress_multiplier`), then applies `residual_loss` as one
/// uncompressed top-up into `residual_bin_id`. The engine holds no state
/// beyond this value; repeating the computation with the same parameters
/// reproduces it exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedDistribution {
    /// Per-bin deposit amounts in whole-token units, capacity-clamped.
    pub compressed_bins: CompressedBinAmounts,
    /// Raw units represented by one compressed unit (`10^base_decimals`).
    pub decompress_multiplier: u128,
    /// Raw units that compression and redistribution could not place.
    pub residual_loss: u128,
    /// Bin designated for the residual top-up: the last bin of the range.
    pub residual_bin_id: BinId,
    /// Number of position chunks needed to submit the map on-chain.
    pub position_count: u32,
}

impl SeedDistribution {
    /// Number of seeded bins.
    pub fn bin_count(&self) -> usize {
        self.compressed_bins.len()
    }

    /// Raw units covered by the compressed map alone, excluding the
    /// residual top-up. `None` on overflow of the widening sum.
    pub fn compressed_total_raw(&self) -> Option<u128> {
        self.compressed_bins
            .values()
            .try_fold(0u128, |accumulated, &compressed| {
                compressed
                    .checked_mul(self.decompress_multiplier)
                    .and_then(|raw| accumulated.checked_add(raw))
            })
    }

    /// Inclusive bin windows, one per position, tiling the seeded range.
    pub fn position_windows(&self) -> Result<Vec<(BinId, BinId)>, DistributionError> {
        let (&first, _) = self
            .compressed_bins
            .first_key_value()
            .ok_or(DistributionError::EmptyBinRange)?;
        let (&last, _) = self
            .compressed_bins
            .last_key_value()
            .ok_or(DistributionError::EmptyBinRange)?;
        position_bin_windows(first, last + 1, MAX_BIN_PER_POSITION)
    }
}

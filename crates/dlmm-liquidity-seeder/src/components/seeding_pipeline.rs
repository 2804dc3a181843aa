//! End-to-end seeding pipeline: curve generation, compression,
//! redistribution, and position sizing in one pass.

use tracing::debug;

use crate::components::compression::{
    compress_bin_amount, distribute_amount_to_compressed_bins_by_ratio,
};
use crate::components::deposit_curve::generate_amount_for_bin_range;
use crate::components::position_layout::get_position_count;
use crate::error::DistributionError;
use crate::state::bin_maps::{CompressionResult, RedistributionResult};
use crate::state::distribution_plan::SeedDistribution;
use crate::state::seed_parameters::SeedRangeParameters;
use crate::utils::constants::{DEFAULT_BIN_CAP_AMOUNT, MAX_BIN_PER_POSITION};
use crate::utils::units::decompress_multiplier;

/// Compute the full seeding distribution for a validated parameter set.
///
/// Single-pass and side-effect free: exact amounts are generated along the
/// concentration curve, compressed into whole-token units, the truncation
/// loss is redistributed by deposit ratio under the default bin capacity,
/// and the range is sized into position chunks. The residual loss that
/// remains after redistribution is assigned to the last bin of the range
/// for the caller to apply as a single uncompressed top-up.
pub fn build_seed_distribution(
    parameters: &SeedRangeParameters,
) -> Result<SeedDistribution, DistributionError> {
    parameters.validate()?;

    let bin_amounts = generate_amount_for_bin_range(
        parameters.total_amount,
        parameters.bin_step_bps,
        parameters.base_decimals,
        parameters.quote_decimals,
        parameters.min_bin_id,
        parameters.max_bin_id,
        parameters.curvature,
    )?;

    let multiplier = decompress_multiplier(parameters.base_decimals)?;
    let CompressionResult {
        compressed_bin_amount,
        compression_loss,
    } = compress_bin_amount(&bin_amounts, multiplier)?;
    debug!(
        bin_count = bin_amounts.len(),
        compression_loss, "compressed bin deposits"
    );

    let RedistributionResult {
        compressed_bin_amount,
        residual_loss,
    } = distribute_amount_to_compressed_bins_by_ratio(
        &compressed_bin_amount,
        compression_loss,
        multiplier,
        DEFAULT_BIN_CAP_AMOUNT,
    )?;

    let position_count = get_position_count(
        parameters.min_bin_id,
        parameters.max_bin_id - 1,
        MAX_BIN_PER_POSITION,
    )?;
    debug!(residual_loss, position_count, "seed distribution ready");

    Ok(SeedDistribution {
        compressed_bins: compressed_bin_amount,
        decompress_multiplier: multiplier,
        residual_loss,
        residual_bin_id: parameters.max_bin_id - 1,
        position_count,
    })
}

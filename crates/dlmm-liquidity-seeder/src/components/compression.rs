//! Fixed-point compression of exact bin amounts and loss-conserving
//! redistribution under the per-bin capacity.
//!
//! The on-chain deposit field stores whole-token counts, not raw units, so
//! every exact amount is floor-divided by the decompression multiplier
//! (`10^base_decimals`). The truncated remainders are aggregated and pushed
//! back into the bins proportionally to each bin's share of the compressed
//! total; whatever still cannot be placed is reported as residual loss for
//! the caller to apply as a single uncompressed top-up.

use ethnum::U256;

use crate::error::DistributionError;
use crate::state::bin_maps::{
    CompressedBinAmounts, CompressionResult, ExactBinAmounts, RedistributionResult,
};

/// `floor(a * b / denominator)` with a 256-bit intermediate product.
///
/// Both factors are full-width `u128`, so the product needs up to 256 bits
/// before the division brings it back into range.
fn mul_div_floor(a: u128, b: u128, denominator: u128) -> Result<u128, DistributionError> {
    if denominator == 0 {
        return Err(DistributionError::DivisionByZero);
    }
    let product = U256::from(a) * U256::from(b);
    let quotient = product / U256::from(denominator);
    if quotient > U256::from(u128::MAX) {
        return Err(DistributionError::MathOverflow);
    }
    Ok(quotient.as_u128())
}

/// Compress exact per-bin amounts into whole-token units.
///
/// For every bin, `compressed = floor(exact / multiplier)`; the discarded
/// remainder (strictly below `multiplier` per bin) accumulates into
/// `compression_loss`. Compression can only under-fund a bin, never
/// over-fund it.
pub fn compress_bin_amount(
    bin_amounts: &ExactBinAmounts,
    multiplier: u128,
) -> Result<CompressionResult, DistributionError> {
    if multiplier == 0 {
        return Err(DistributionError::ZeroMultiplier);
    }

    let mut compressed_bin_amount = CompressedBinAmounts::new();
    let mut compression_loss = 0u128;

    for (&bin_id, &amount) in bin_amounts {
        let compressed = amount / multiplier;
        let remainder = amount - compressed * multiplier;
        compression_loss = compression_loss
            .checked_add(remainder)
            .ok_or(DistributionError::MathOverflow)?;
        compressed_bin_amount.insert(bin_id, compressed);
    }

    Ok(CompressionResult {
        compressed_bin_amount,
        compression_loss,
    })
}

/// Redistribute compression loss across compressed bins by deposit ratio.
///
/// Each bin's top-up is `floor(floor(compressed * loss / total_compressed)
/// / multiplier)` compressed units: the raw loss is first apportioned by
/// the bin's share of total compressed liquidity, then re-compressed. Both
/// divisions floor, which deliberately under-distributes; the two-step floor
/// is part of the wire-compatible behavior and must not be "improved" to a
/// single rounding.
///
/// A top-up that would push a bin past `bin_cap_amount` is cut so the bin
/// lands exactly on the capacity; the clamped-away portion is not carried to
/// other bins and falls through into `residual_loss`.
///
/// When every bin compressed to zero there is no ratio to distribute by and
/// the whole loss is returned as residual.
pub fn distribute_amount_to_compressed_bins_by_ratio(
    compressed_bin_amount: &CompressedBinAmounts,
    compression_loss: u128,
    multiplier: u128,
    bin_cap_amount: u128,
) -> Result<RedistributionResult, DistributionError> {
    if multiplier == 0 {
        return Err(DistributionError::ZeroMultiplier);
    }

    let mut total_compressed = 0u128;
    for &compressed in compressed_bin_amount.values() {
        total_compressed = total_compressed
            .checked_add(compressed)
            .ok_or(DistributionError::MathOverflow)?;
    }
    if total_compressed == 0 {
        return Ok(RedistributionResult {
            compressed_bin_amount: compressed_bin_amount.clone(),
            residual_loss: compression_loss,
        });
    }

    let mut redistributed = CompressedBinAmounts::new();
    let mut total_deposited = 0u128;

    for (&bin_id, &compressed) in compressed_bin_amount {
        let deposit_share = mul_div_floor(compressed, compression_loss, total_compressed)?;
        let mut top_up = deposit_share / multiplier;

        // Capacity clamp. Bins already at or above capacity take nothing.
        let headroom = bin_cap_amount.saturating_sub(compressed);
        if top_up > headroom {
            top_up = headroom;
        }
        let new_amount = compressed
            .checked_add(top_up)
            .ok_or(DistributionError::MathOverflow)?;

        let deposited_raw = top_up
            .checked_mul(multiplier)
            .ok_or(DistributionError::MathOverflow)?;
        total_deposited = total_deposited
            .checked_add(deposited_raw)
            .ok_or(DistributionError::MathOverflow)?;
        redistributed.insert(bin_id, new_amount);
    }

    // Every top-up is bounded by its bin's proportional share of the loss,
    // so the total deposited can never exceed the loss being distributed.
    let residual_loss = compression_loss
        .checked_sub(total_deposited)
        .ok_or(DistributionError::MathOverflow)?;

    Ok(RedistributionResult {
        compressed_bin_amount: redistributed,
        residual_loss,
    })
}

//! Price model for bin-based liquidity pools.
//!
//! # Price grid
//!
//! Bin ids form a geometric price grid: `price(bin_id) = (1 + step/10_000)
//! ^ bin_id`, quoted in raw units (quote lamports per base lamport). A
//! per-token ("UI") price differs from the per-lamport price by the factor
//! `10^(base_decimals - quote_decimals)`. All conversions run on a 96-bit
//! decimal type, giving 28 significant digits so that rounding error does
//! not compound across the hundreds of bins a seeding range can span.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};

use crate::error::{DistributionError, PriceMathError};
use crate::state::bin_maps::BinId;
use crate::utils::constants::{BASIS_POINT_MAX, MAX_TOKEN_DECIMALS};

/// Rounding direction when snapping a price onto the bin grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceRounding {
    /// Round down to the bin at or below the price.
    Down,
    /// Round up to the bin at or above the price.
    Up,
}

/// Price multiplier between adjacent bins, `1 + bin_step / 10_000`.
fn bin_step_base(bin_step_bps: u16) -> Result<Decimal, PriceMathError> {
    if bin_step_bps == 0 || bin_step_bps > BASIS_POINT_MAX {
        return Err(PriceMathError::InvalidBinStep);
    }
    let step = Decimal::from(bin_step_bps)
        .checked_div(Decimal::from(BASIS_POINT_MAX))
        .ok_or(PriceMathError::PriceOverflow)?;
    Ok(Decimal::ONE + step)
}

/// `10^exponent` as a decimal; the exponent may be negative.
fn pow10(exponent: i32) -> Result<Decimal, PriceMathError> {
    Decimal::TEN
        .checked_powi(i64::from(exponent))
        .ok_or(PriceMathError::PriceOverflow)
}

/// Per-lamport price of a bin: `(1 + bin_step/10_000)^bin_id`.
///
/// Extreme bin ids push the geometric grid outside the decimal range; those
/// are reported as [`PriceMathError::PriceOverflow`] rather than saturated,
/// since a saturated price would silently distort every downstream amount.
pub fn price_of_bin(bin_id: BinId, bin_step_bps: u16) -> Result<Decimal, PriceMathError> {
    let base = bin_step_base(bin_step_bps)?;
    base.checked_powi(i64::from(bin_id))
        .ok_or(PriceMathError::PriceOverflow)
}

/// Per-token price of a bin: the per-lamport price scaled by
/// `10^(base_decimals - quote_decimals)`.
pub fn price_of_bin_per_token(
    bin_id: BinId,
    bin_step_bps: u16,
    base_decimals: u8,
    quote_decimals: u8,
) -> Result<Decimal, PriceMathError> {
    let per_lamport = price_of_bin(bin_id, bin_step_bps)?;
    price_per_lamport_to_per_token(per_lamport, base_decimals, quote_decimals)
}

/// Scale a per-token price down to raw units (quote lamports per base
/// lamport).
pub fn price_per_token_to_per_lamport(
    price: Decimal,
    base_decimals: u8,
    quote_decimals: u8,
) -> Result<Decimal, PriceMathError> {
    let scale = decimal_scale(quote_decimals, base_decimals)?;
    price
        .checked_mul(scale)
        .ok_or(PriceMathError::PriceOverflow)
}

/// Scale a per-lamport price up to a per-token ("UI") price.
pub fn price_per_lamport_to_per_token(
    price: Decimal,
    base_decimals: u8,
    quote_decimals: u8,
) -> Result<Decimal, PriceMathError> {
    let scale = decimal_scale(base_decimals, quote_decimals)?;
    price
        .checked_mul(scale)
        .ok_or(PriceMathError::PriceOverflow)
}

fn decimal_scale(lhs_decimals: u8, rhs_decimals: u8) -> Result<Decimal, PriceMathError> {
    if lhs_decimals > MAX_TOKEN_DECIMALS || rhs_decimals > MAX_TOKEN_DECIMALS {
        return Err(PriceMathError::DecimalsOutOfRange);
    }
    pow10(i32::from(lhs_decimals) - i32::from(rhs_decimals))
}

/// Bin id whose price brackets the given per-lamport price, rounded in the
/// requested direction.
///
/// Inverts the geometric grid through logarithms:
/// `bin_id = ln(price) / ln(1 + bin_step/10_000)`, then floors or ceils per
/// `rounding`. Single-bin seeding uses this directly with caller-selected
/// rounding; range seeding derives both ends via
/// [`bin_range_for_price_range`].
pub fn bin_id_from_price(
    price_per_lamport: Decimal,
    bin_step_bps: u16,
    rounding: PriceRounding,
) -> Result<BinId, PriceMathError> {
    if price_per_lamport <= Decimal::ZERO {
        return Err(PriceMathError::NonPositivePrice);
    }
    let base = bin_step_base(bin_step_bps)?;

    let price_log = price_per_lamport
        .checked_ln()
        .ok_or(PriceMathError::NonPositivePrice)?;
    let base_log = base.checked_ln().ok_or(PriceMathError::InvalidBinStep)?;
    let bin_id = price_log
        .checked_div(base_log)
        .ok_or(PriceMathError::PriceOverflow)?;

    let snapped = match rounding {
        PriceRounding::Down => bin_id.floor(),
        PriceRounding::Up => bin_id.ceil(),
    };
    snapped
        .to_i64()
        .and_then(|id| BinId::try_from(id).ok())
        .ok_or(PriceMathError::BinIdOutOfRange)
}

/// Bin range covering a per-lamport price range, rounded inward.
///
/// The minimum snaps up and the maximum snaps down so the seeded range never
/// extends past the requested prices. A range narrower than one bin step can
/// invert after snapping; that is rejected as
/// [`DistributionError::PriceRangeTooNarrow`].
pub fn bin_range_for_price_range(
    min_price_per_lamport: Decimal,
    max_price_per_lamport: Decimal,
    bin_step_bps: u16,
) -> Result<(BinId, BinId), DistributionError> {
    let min_bin_id = bin_id_from_price(min_price_per_lamport, bin_step_bps, PriceRounding::Up)?;
    let max_bin_id = bin_id_from_price(max_price_per_lamport, bin_step_bps, PriceRounding::Down)?;
    if min_bin_id > max_bin_id {
        return Err(DistributionError::PriceRangeTooNarrow);
    }
    Ok((min_bin_id, max_bin_id))
}

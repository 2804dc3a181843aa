//! Curve-shaped generation of exact per-bin deposit amounts.
//!
//! # Cumulative deposit function
//!
//! Deposits follow `C(p) = total * ((p - min_price) / (max_price -
//! min_price))^k` with `k = 1 / curvature`. `C` is monotonically
//! non-decreasing over the price range, `C(min_price) = 0` and
//! `C(max_price) = total`. A bin receives the difference of `C` between its
//! two boundary prices, with each boundary floored to an integer first:
//!
//! `amount(b) = floor(C(price(b + 1))) - floor(C(price(b)))`
//!
//! The intermediate floors cancel across consecutive bins, so the amounts
//! telescope and sum to exactly `floor(C(max_price)) = total`. The
//! generator is exact by construction, independent of how precisely the
//! power function evaluates interior points.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, MathematicalOps};

use crate::components::bin_price::price_of_bin_per_token;
use crate::error::{DistributionError, PriceMathError};
use crate::state::bin_maps::{BinId, ExactBinAmounts};

/// Exponent applied to the normalized price position, `k = 1 / curvature`.
///
/// Curvature below one concentrates deposit mass toward the high-price end
/// of the range, above one toward the low end, and exactly one yields a
/// linear ramp.
fn curvature_exponent(curvature: f64) -> Result<Decimal, PriceMathError> {
    if !curvature.is_finite() || curvature <= 0.0 {
        return Err(PriceMathError::InvalidCurvature);
    }
    let curvature = Decimal::from_f64(curvature).ok_or(PriceMathError::InvalidCurvature)?;
    if curvature <= Decimal::ZERO {
        return Err(PriceMathError::InvalidCurvature);
    }
    Decimal::ONE
        .checked_div(curvature)
        .ok_or(PriceMathError::InvalidCurvature)
}

/// `floor(C(price))` for one bin boundary.
fn cumulative_floor(
    total: Decimal,
    price: Decimal,
    min_price: Decimal,
    price_span: Decimal,
    k: Decimal,
) -> Result<u128, DistributionError> {
    let mut position = (price - min_price)
        .checked_div(price_span)
        .ok_or(DistributionError::DivisionByZero)?;
    // Boundary prices at the range ends land exactly on 0 and 1; the clamp
    // only absorbs sub-ulp excursions from the power-of-base evaluation.
    if position < Decimal::ZERO {
        position = Decimal::ZERO;
    }
    if position > Decimal::ONE {
        position = Decimal::ONE;
    }
    let weight = position
        .checked_powd(k)
        .ok_or(DistributionError::MathOverflow)?;
    let cumulative = total
        .checked_mul(weight)
        .ok_or(DistributionError::MathOverflow)?;
    cumulative
        .floor()
        .to_u128()
        .ok_or(DistributionError::MathOverflow)
}

/// Distribute `total_amount` raw units across `[min_bin_id, max_bin_id)`
/// following the concentration curve.
///
/// The returned map covers every bin of the half-open range and its values
/// sum to exactly `total_amount`. Individual bins may receive zero when the
/// curve is flat at their position. An empty or inverted range is a
/// configuration error: a zero-width range cannot absorb any deposit.
pub fn generate_amount_for_bin_range(
    total_amount: u128,
    bin_step_bps: u16,
    base_decimals: u8,
    quote_decimals: u8,
    min_bin_id: BinId,
    max_bin_id: BinId,
    curvature: f64,
) -> Result<ExactBinAmounts, DistributionError> {
    if min_bin_id > max_bin_id {
        return Err(DistributionError::InvalidBinRange);
    }
    if min_bin_id == max_bin_id {
        return Err(DistributionError::EmptyBinRange);
    }

    let k = curvature_exponent(curvature)?;
    let total =
        Decimal::from_u128(total_amount).ok_or(DistributionError::AmountOutOfRange)?;

    let min_price =
        price_of_bin_per_token(min_bin_id, bin_step_bps, base_decimals, quote_decimals)?;
    let max_price =
        price_of_bin_per_token(max_bin_id, bin_step_bps, base_decimals, quote_decimals)?;
    if max_price <= min_price {
        return Err(PriceMathError::DegenerateCurve.into());
    }
    let price_span = max_price - min_price;

    let mut amounts = ExactBinAmounts::new();
    let mut previous = cumulative_floor(total, min_price, min_price, price_span, k)?;
    for bin_id in min_bin_id..max_bin_id {
        let boundary_price =
            price_of_bin_per_token(bin_id + 1, bin_step_bps, base_decimals, quote_decimals)?;
        let current = cumulative_floor(total, boundary_price, min_price, price_span, k)?;
        // Monotonic by construction of C; checked in case the power routine
        // ever loses monotonicity at extreme exponents.
        let amount = current
            .checked_sub(previous)
            .ok_or(DistributionError::MathOverflow)?;
        amounts.insert(bin_id, amount);
        previous = current;
    }
    Ok(amounts)
}

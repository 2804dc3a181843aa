use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::components::bin_price::{bin_range_for_price_range, price_per_token_to_per_lamport};
use crate::error::{DistributionError, PriceMathError};
use crate::state::bin_maps::BinId;
use crate::utils::constants::{BASIS_POINT_MAX, MAX_TOKEN_DECIMALS};

/// Validated input bundle for one seeding computation.
///
/// The engine has no access to live market state: the caller is responsible
/// for checking the range against the pool's current price before invoking
/// it (a range starting below the tradable price is a configuration error
/// upstream of this crate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedRangeParameters {
    /// Total deposit in raw base-token units, at full decimal precision.
    pub total_amount: u128,
    /// Price increment between adjacent bins, in basis points.
    pub bin_step_bps: u16,
    pub base_decimals: u8,
    pub quote_decimals: u8,
    /// First seeded bin.
    pub min_bin_id: BinId,
    /// End of the seeded range, exclusive.
    pub max_bin_id: BinId,
    /// Concentration parameter; `1 / curvature` is the exponent applied to
    /// the normalized price position.
    pub curvature: f64,
}

impl SeedRangeParameters {
    /// Build parameters from a per-token price range, snapping both ends
    /// onto the bin grid (minimum rounds up, maximum rounds down).
    pub fn from_price_range(
        total_amount: u128,
        bin_step_bps: u16,
        base_decimals: u8,
        quote_decimals: u8,
        min_price: Decimal,
        max_price: Decimal,
        curvature: f64,
    ) -> Result<Self, DistributionError> {
        let min_per_lamport =
            price_per_token_to_per_lamport(min_price, base_decimals, quote_decimals)?;
        let max_per_lamport =
            price_per_token_to_per_lamport(max_price, base_decimals, quote_decimals)?;
        let (min_bin_id, max_bin_id) =
            bin_range_for_price_range(min_per_lamport, max_per_lamport, bin_step_bps)?;

        let parameters = Self {
            total_amount,
            bin_step_bps,
            base_decimals,
            quote_decimals,
            min_bin_id,
            max_bin_id,
            curvature,
        };
        parameters.validate()?;
        Ok(parameters)
    }

    /// Reject structurally invalid parameters before any computation runs.
    pub fn validate(&self) -> Result<(), DistributionError> {
        if self.bin_step_bps == 0 || self.bin_step_bps > BASIS_POINT_MAX {
            return Err(PriceMathError::InvalidBinStep.into());
        }
        if self.base_decimals > MAX_TOKEN_DECIMALS || self.quote_decimals > MAX_TOKEN_DECIMALS {
            return Err(PriceMathError::DecimalsOutOfRange.into());
        }
        if !self.curvature.is_finite() || self.curvature <= 0.0 {
            return Err(PriceMathError::InvalidCurvature.into());
        }
        if self.min_bin_id > self.max_bin_id {
            return Err(DistributionError::InvalidBinRange);
        }
        if self.min_bin_id == self.max_bin_id {
            return Err(DistributionError::EmptyBinRange);
        }
        if self.total_amount == 0 {
            return Err(DistributionError::ZeroAmount);
        }
        if Decimal::from_u128(self.total_amount).is_none() {
            return Err(DistributionError::AmountOutOfRange);
        }
        Ok(())
    }

    /// Width of the seeded range in bins.
    pub fn bin_count(&self) -> u32 {
        (i64::from(self.max_bin_id) - i64::from(self.min_bin_id)) as u32
    }
}

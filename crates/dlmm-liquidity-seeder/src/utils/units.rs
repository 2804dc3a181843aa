use crate::error::{DistributionError, PriceMathError};
use crate::utils::constants::{MAX_TOKEN_DECIMALS, POW10};

/// Raw units per whole token for a mint with `decimals` decimal places.
///
/// This is the decompression multiplier of the fixed-point compressor: the
/// compressed on-chain field stores whole-token counts, so one compressed
/// unit decompresses to `10^decimals` raw units.
pub fn decompress_multiplier(decimals: u8) -> Result<u128, PriceMathError> {
    if decimals > MAX_TOKEN_DECIMALS {
        return Err(PriceMathError::DecimalsOutOfRange);
    }
    Ok(POW10[decimals as usize])
}

/// Convert a whole-token amount into raw units (`amount * 10^decimals`).
pub fn amount_to_raw_units(ui_amount: u128, decimals: u8) -> Result<u128, DistributionError> {
    let multiplier = decompress_multiplier(decimals)?;
    ui_amount
        .checked_mul(multiplier)
        .ok_or(DistributionError::MathOverflow)
}

/// Convert raw units back into whole tokens, discarding the sub-token
/// remainder.
pub fn raw_units_to_ui_amount(raw_amount: u128, decimals: u8) -> Result<u128, PriceMathError> {
    let multiplier = decompress_multiplier(decimals)?;
    Ok(raw_amount / multiplier)
}

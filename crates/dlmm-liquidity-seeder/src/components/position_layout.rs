//! Sizing of fixed-capacity position chunks over a bin range.

use crate::error::DistributionError;
use crate::state::bin_maps::BinId;

/// Number of position chunks needed to cover `[min_bin_id, max_bin_id]`
/// (inclusive of both ends) when one position holds at most
/// `max_bins_per_position` contiguous bins.
///
/// Callers working with a half-open range pass `max_bin_id - 1`. Pure
/// integer arithmetic: `(max - min) / width + 1`.
pub fn get_position_count(
    min_bin_id: BinId,
    max_bin_id: BinId,
    max_bins_per_position: u32,
) -> Result<u32, DistributionError> {
    if max_bins_per_position == 0 {
        return Err(DistributionError::ZeroPositionWidth);
    }
    if min_bin_id > max_bin_id {
        return Err(DistributionError::InvalidBinRange);
    }
    let bin_delta = i64::from(max_bin_id) - i64::from(min_bin_id);
    let count = bin_delta / i64::from(max_bins_per_position) + 1;
    u32::try_from(count).map_err(|_| DistributionError::MathOverflow)
}

/// Inclusive bin windows, one per position, covering `[min_bin_id,
/// max_bin_id)`.
///
/// Every window spans `max_bins_per_position` bins except the last, which is
/// truncated at the end of the range. Windows tile the range without gaps or
/// overlap, in increasing bin order.
pub fn position_bin_windows(
    min_bin_id: BinId,
    max_bin_id: BinId,
    max_bins_per_position: u32,
) -> Result<Vec<(BinId, BinId)>, DistributionError> {
    if min_bin_id > max_bin_id {
        return Err(DistributionError::InvalidBinRange);
    }
    if min_bin_id == max_bin_id {
        return Err(DistributionError::EmptyBinRange);
    }
    let count = get_position_count(min_bin_id, max_bin_id - 1, max_bins_per_position)?;
    let width = i64::from(max_bins_per_position);
    let last_bin = i64::from(max_bin_id) - 1;

    let mut windows = Vec::with_capacity(count as usize);
    for chunk in 0..i64::from(count) {
        let lower = i64::from(min_bin_id) + width * chunk;
        let upper = (lower + width - 1).min(last_bin);
        windows.push((lower as BinId, upper as BinId));
    }
    Ok(windows)
}

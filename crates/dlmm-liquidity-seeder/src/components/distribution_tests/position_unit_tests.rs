//! Position counting identities and window tiling.

use crate::components::position_layout::{get_position_count, position_bin_windows};
use crate::error::DistributionError;
use crate::state::bin_maps::BinId;

#[test]
fn a_single_bin_needs_one_position() {
    assert_eq!(get_position_count(5, 5, 70).unwrap(), 1);
    assert_eq!(get_position_count(-300, -300, 1).unwrap(), 1);
}

#[test]
fn one_bin_past_a_full_position_needs_two() {
    for width in [1u32, 2, 7, 70] {
        let min_bin_id = -43;
        let max_bin_id = min_bin_id + 2 * width as BinId - 1;
        assert_eq!(
            get_position_count(min_bin_id, max_bin_id, width).unwrap(),
            2,
            "width {width}"
        );
    }
}

#[test]
fn a_partially_filled_position_still_counts() {
    // 70 bins inclusive fit exactly in one position; 71 spill into a second.
    assert_eq!(get_position_count(-200, -131, 70).unwrap(), 1);
    assert_eq!(get_position_count(-200, -130, 70).unwrap(), 2);
}

#[test]
fn degenerate_position_arguments_fail_fast() {
    assert_eq!(
        get_position_count(0, 10, 0),
        Err(DistributionError::ZeroPositionWidth)
    );
    assert_eq!(
        get_position_count(11, 10, 70),
        Err(DistributionError::InvalidBinRange)
    );
}

#[test]
fn windows_tile_the_range_without_gaps() {
    let windows = position_bin_windows(-151, 0, 70).unwrap();
    assert_eq!(windows, vec![(-151, -82), (-81, -12), (-11, -1)]);

    let count = get_position_count(-151, -1, 70).unwrap();
    assert_eq!(windows.len(), count as usize);

    assert_eq!(windows.first().unwrap().0, -151);
    assert_eq!(windows.last().unwrap().1, -1);
    for pair in windows.windows(2) {
        assert_eq!(
            pair[1].0,
            pair[0].1 + 1,
            "windows must be contiguous in bin order"
        );
    }
    for &(lower, upper) in &windows {
        assert!(upper - lower + 1 <= 70);
    }
}

#[test]
fn exact_multiples_produce_full_windows_only() {
    let windows = position_bin_windows(0, 140, 70).unwrap();
    assert_eq!(windows, vec![(0, 69), (70, 139)]);
}

#[test]
fn single_bin_window() {
    assert_eq!(position_bin_windows(7, 8, 70).unwrap(), vec![(7, 7)]);
}

#[test]
fn empty_window_range_is_rejected() {
    assert_eq!(
        position_bin_windows(7, 7, 70),
        Err(DistributionError::EmptyBinRange)
    );
}

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::state::bin_maps::BinId;
use crate::state::seed_parameters::SeedRangeParameters;

/// Asserts a bin amount map covers exactly the half-open range
/// `[min_bin_id, max_bin_id)` with contiguous keys.
macro_rules! assert_bin_coverage {
    ($map:expr, $min_bin_id:expr, $max_bin_id:expr) => {{
        let map_ref = &$map;
        let expected_len = ($max_bin_id as i64 - $min_bin_id as i64) as usize;
        assert_eq!(
            map_ref.len(),
            expected_len,
            "map must hold one entry per bin in the range"
        );
        for (offset, &bin_id) in map_ref.keys().enumerate() {
            assert_eq!(
                i64::from(bin_id),
                $min_bin_id as i64 + offset as i64,
                "bin ids must be contiguous from the range minimum"
            );
        }
    }};
}

pub(crate) use assert_bin_coverage;

/// Reference seeding scenario: a 5-decimal base token seeded with 200k
/// whole tokens against a 6-decimal quote, price range 0.005–0.1 at a 2%
/// bin step, concentrated toward the range maximum.
pub(crate) fn scenario_parameters() -> SeedRangeParameters {
    SeedRangeParameters::from_price_range(
        200_000 * 100_000,
        200,
        5,
        6,
        "0.005".parse::<Decimal>().unwrap(),
        "0.1".parse::<Decimal>().unwrap(),
        0.6,
    )
    .expect("reference scenario parameters must validate")
}

/// Linear fixture with amounts large enough that flooring noise cannot
/// disturb shape assertions.
pub(crate) fn linear_parameters() -> SeedRangeParameters {
    SeedRangeParameters {
        total_amount: 1_000_000_000_000,
        bin_step_bps: 100,
        base_decimals: 6,
        quote_decimals: 6,
        min_bin_id: -30,
        max_bin_id: 30,
        curvature: 1.0,
    }
}

pub(crate) fn map_total(map: &BTreeMap<BinId, u128>) -> u128 {
    map.values().sum()
}

//! Bin-liquidity seeding distribution engine.
//!
//! Decides how much of a base asset to place into each discrete price bin
//! when bootstrapping a bin-based liquidity pool with one-sided liquidity:
//! exact per-bin amounts are generated along a configurable concentration
//! curve, compressed into the fixed-width on-chain deposit field, and the
//! truncation loss is redistributed across bins without breaching the
//! per-bin capacity. The engine is a pure function of its numeric inputs,
//! with no I/O, no chain access, and no shared state, and it reports every
//! unit of precision loss back to the caller instead of dropping it.
//!
//! Typical use goes through [`build_seed_distribution`] with a validated
//! [`SeedRangeParameters`]; the individual pipeline stages are exported for
//! callers that need to interleave their own bookkeeping.

pub mod components;
pub mod error;
pub mod state;
pub mod utils;

pub use components::bin_price::{
    bin_id_from_price, bin_range_for_price_range, price_of_bin, price_of_bin_per_token,
    price_per_lamport_to_per_token, price_per_token_to_per_lamport, PriceRounding,
};
pub use components::compression::{
    compress_bin_amount, distribute_amount_to_compressed_bins_by_ratio,
};
pub use components::deposit_curve::generate_amount_for_bin_range;
pub use components::position_layout::{get_position_count, position_bin_windows};
pub use components::seeding_pipeline::build_seed_distribution;
pub use error::{DistributionError, PriceMathError};
pub use state::bin_maps::{
    BinId, CompressedBinAmounts, CompressionResult, ExactBinAmounts, RedistributionResult,
};
pub use state::distribution_plan::SeedDistribution;
pub use state::seed_parameters::SeedRangeParameters;

//! Test harness for the seeding distribution pipeline.
//!
//! Split into focused submodules:
//! - `price_unit_tests`: deterministic coverage of the bin price grid and
//!   price/bin conversions.
//! - `curve_unit_tests`: exact conservation and shape of the curve amount
//!   generator.
//! - `compression_unit_tests`: compression remainders, redistribution
//!   ratios, and capacity clamping, pinned against hand-computed values.
//! - `position_unit_tests`: position counting identities and window tiling.
//! - `property_tests`: proptest-powered fuzzing of the pipeline invariants
//!   under randomized ranges, amounts, and curvatures.
//! - `scenario_tests`: the reference end-to-end seeding scenario.
//! - `helpers`: shared fixtures and invariant assertions.

pub mod helpers;
pub mod position_unit_tests;

pub mod bin_maps;
pub mod distribution_plan;
pub mod seed_parameters;

pub use bin_maps::*;
pub use distribution_plan::*;
pub use seed_parameters::*;

#[cfg(test)]
pub mod state_tests;

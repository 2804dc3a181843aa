pub mod bin_price;
pub mod compression;
pub mod deposit_curve;
pub mod position_layout;
pub mod seeding_pipeline;

pub use bin_price::*;
pub use compression::*;
pub use deposit_curve::*;
pub use position_layout::*;
pub use seeding_pipeline::*;

#[cfg(test)]
mod distribution_tests;

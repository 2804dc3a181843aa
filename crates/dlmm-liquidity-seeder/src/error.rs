use thiserror::Error;

/// Structural failures of the price/bin model. These are rejected before any
/// distribution math runs; none of them are recoverable inside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PriceMathError {
    #[error("bin step must be between 1 and 10000 basis points")]
    InvalidBinStep,
    #[error("token decimals exceed the supported range")]
    DecimalsOutOfRange,
    #[error("price must be strictly positive")]
    NonPositivePrice,
    #[error("price is outside the representable decimal range")]
    PriceOverflow,
    #[error("bin id is outside the addressable range")]
    BinIdOutOfRange,
    #[error("curvature must be finite and greater than zero")]
    InvalidCurvature,
    #[error("max price does not exceed min price")]
    DegenerateCurve,
}

/// Failures of the distribution pipeline itself. Precision loss is never an
/// error: compression and redistribution report it as data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DistributionError {
    #[error("min bin id exceeds max bin id")]
    InvalidBinRange,
    #[error("bin range is empty")]
    EmptyBinRange,
    #[error("price range is too narrow to cover a single bin")]
    PriceRangeTooNarrow,
    #[error("seed amount must be greater than zero")]
    ZeroAmount,
    #[error("seed amount is outside the representable decimal range")]
    AmountOutOfRange,
    #[error("decompression multiplier must be greater than zero")]
    ZeroMultiplier,
    #[error("position width must be greater than zero")]
    ZeroPositionWidth,
    #[error("arithmetic overflow during distribution")]
    MathOverflow,
    #[error("division by zero during distribution")]
    DivisionByZero,
    #[error(transparent)]
    PriceMath(#[from] PriceMathError),
}

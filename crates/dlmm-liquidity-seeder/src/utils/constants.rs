/// Basis-point denominator used across the price model: a bin step of `s`
/// basis points means adjacent bins differ in price by a factor of
/// `1 + s / 10_000`.
pub const BASIS_POINT_MAX: u16 = 10_000;

/// Number of contiguous bins one on-chain position account can hold. A
/// seeding range wider than this is split into multiple position chunks.
pub const MAX_BIN_PER_POSITION: u32 = 70;

/// Default per-bin capacity of the compressed deposit field. The on-chain
/// layout stores compressed amounts in 32 bits; redistribution clamps
/// against this unless the caller supplies a different capacity.
pub const DEFAULT_BIN_CAP_AMOUNT: u128 = u32::MAX as u128;

/// Largest supported token decimal precision. Bounds the decompression
/// multiplier lookup below and keeps decimal price scaling well inside the
/// 96-bit mantissa of the decimal type.
pub const MAX_TOKEN_DECIMALS: u8 = 18;

/// Precomputed powers of 10 covering every supported decimal precision.
/// Indexing with a token's decimals yields its raw-units-per-whole-token
/// multiplier without repeated exponentiation.
pub const POW10: [u128; 19] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
    10_000_000_000,
    100_000_000_000,
    1_000_000_000_000,
    10_000_000_000_000,
    100_000_000_000_000,
    1_000_000_000_000_000,
    10_000_000_000_000_000,
    100_000_000_000_000_000,
    1_000_000_000_000_000_000,
];

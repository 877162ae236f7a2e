use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.08 = 8%). Never as percentages.
pub type Rate = Decimal;

/// Rates as supplied by callers (8 = 8%). Converted to [`Rate`] on entry.
pub type Percent = Decimal;

/// Decimal places kept on every monetary output.
pub const MONEY_DP: u32 = 2;

/// Tie-break used when rounding money. Banker's rounding: 0.125 -> 0.12, 0.135 -> 0.14.
pub const MONEY_ROUNDING: RoundingStrategy = RoundingStrategy::MidpointNearestEven;

/// Round a monetary amount to cents. The result always carries exactly two
/// decimal places, so 52000 serializes as "52000.00".
pub fn round_money(value: Money) -> Money {
    let mut rounded = value.round_dp_with_strategy(MONEY_DP, MONEY_ROUNDING);
    rounded.rescale(MONEY_DP);
    rounded
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

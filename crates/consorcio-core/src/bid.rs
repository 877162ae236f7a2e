use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::calculator::Calculator;
use crate::contract::{ContractInput, ContractTerms};
use crate::{types::*, ConsorcioResult};

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

/// How a bid (lance) is applied to the outstanding balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BidStrategy {
    /// Keep the installment, pay fewer of them.
    #[serde(alias = "prazo")]
    ReduceTerm,
    /// Keep the term, spread the remaining balance over it.
    #[serde(alias = "parcela")]
    ReduceInstallment,
}

impl std::fmt::Display for BidStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::ReduceTerm => "reduce_term",
            Self::ReduceInstallment => "reduce_installment",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BidInput {
    pub contract: ContractInput,
    pub bid_amount: Money,
    pub strategy: BidStrategy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidSimulation {
    pub strategy: BidStrategy,
    /// Installment after the bid: unchanged under `ReduceTerm`, recomputed
    /// under `ReduceInstallment`.
    pub installment: Money,
    pub remaining_installments: u32,
    pub remaining_balance: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compute the contract schedule, then apply the bid to it.
pub fn simulate_bid(input: &BidInput) -> ConsorcioResult<ComputationOutput<BidSimulation>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let calculator = Calculator::new(ContractTerms::try_from(&input.contract)?);
    let schedule = calculator.calculate();
    let simulation = calculator.simulate_bid(input.bid_amount, &schedule, input.strategy)?;

    if input.bid_amount.is_zero() {
        warnings.push("Bid amount is zero; schedule is unchanged.".into());
    }
    if input.bid_amount >= schedule.total_cost {
        warnings.push(format!(
            "Bid of {} covers the total cost of {}; contract is fully settled.",
            input.bid_amount, schedule.total_cost
        ));
    }

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "schedule_installment": schedule.installment.to_string(),
        "schedule_total_cost": schedule.total_cost.to_string(),
        "remaining_balance": "max(0, total_cost - bid_amount) on the rounded total cost",
        "reduce_term": "floor(remaining_balance / installment)",
        "reduce_installment": "remaining_balance / term_months"
    });

    Ok(with_metadata(
        &format!("Consórcio bid simulation ({})", input.strategy),
        &assumptions,
        warnings,
        elapsed,
        simulation,
    ))
}

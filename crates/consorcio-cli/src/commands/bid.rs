use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::info;

use consorcio_core::bid::{self, BidInput};
use consorcio_core::BidStrategy;

use super::ContractArgs;
use crate::input;
use crate::input::currency::parse_money;

/// How the bid is applied
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StrategyArg {
    /// Keep the installment, pay fewer of them
    #[value(alias = "prazo")]
    ReduceTerm,
    /// Keep the term, lower the installment
    #[value(alias = "parcela")]
    ReduceInstallment,
}

impl From<StrategyArg> for BidStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::ReduceTerm => BidStrategy::ReduceTerm,
            StrategyArg::ReduceInstallment => BidStrategy::ReduceInstallment,
        }
    }
}

/// Arguments for a bid (lance) simulation
#[derive(Args)]
pub struct BidArgs {
    /// Path to JSON bid file with `contract`, `bid_amount` and `strategy`
    #[arg(long)]
    pub input: Option<String>,

    #[command(flatten)]
    pub contract: ContractArgs,

    /// Bid amount (e.g. 20000 or "R$ 20.000,00")
    #[arg(long, alias = "lance", value_parser = parse_money, allow_hyphen_values = true)]
    pub bid: Option<Decimal>,

    /// How the bid is applied to the balance
    #[arg(long, value_enum, default_value = "reduce-term")]
    pub strategy: StrategyArg,
}

pub fn run_bid(args: BidArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let bid_input: BidInput = match input::read_document(args.input.as_deref())? {
        Some(doc) => doc,
        None => BidInput {
            contract: args.contract.to_input()?,
            bid_amount: args.bid.ok_or("--bid is required (or provide --input)")?,
            strategy: args.strategy.into(),
        },
    };

    let output = bid::simulate_bid(&bid_input)?;
    info!(
        strategy = %output.result.strategy,
        remaining_balance = %output.result.remaining_balance,
        remaining_installments = output.result.remaining_installments,
        "bid simulation ready"
    );
    Ok(serde_json::to_value(output)?)
}

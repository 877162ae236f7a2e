use clap::Args;
use serde_json::Value;
use tracing::info;

use consorcio_core::schedule::{self, Schedule};
use consorcio_core::ContractInput;

use super::ContractArgs;
use crate::input;

/// Arguments for the installment schedule
#[derive(Args)]
pub struct ScheduleArgs {
    /// Path to JSON contract file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    #[command(flatten)]
    pub contract: ContractArgs,
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let contract: ContractInput = match input::read_document(args.input.as_deref())? {
        Some(doc) => doc,
        None => args.contract.to_input()?,
    };

    let output = schedule::calculate_schedule(&contract)?;
    let result: &Schedule = &output.result;
    info!(
        installment = %result.installment,
        total_cost = %result.total_cost,
        term_months = result.term_months(),
        "schedule ready"
    );
    Ok(serde_json::to_value(output)?)
}

use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::calculator::Calculator;
use crate::contract::{ContractInput, ContractTerms};
use crate::{types::*, ConsorcioResult};

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Flat installment schedule. All money fields are rounded to cents and every
/// entry in `installments` equals `installment`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub total_admin_fee: Money,
    pub total_reserve_fund: Money,
    pub installment: Money,
    pub total_cost: Money,
    pub installments: Vec<Money>,
}

/// One numbered period of a schedule, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallmentRow {
    pub number: u32,
    pub amount: Money,
}

impl Schedule {
    pub fn term_months(&self) -> usize {
        self.installments.len()
    }

    /// Numbered periods, in payment order.
    pub fn rows(&self) -> impl Iterator<Item = InstallmentRow> + '_ {
        self.installments
            .iter()
            .zip(1u32..)
            .map(|(&amount, number)| InstallmentRow { number, amount })
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Validate contract inputs and compute the baseline schedule.
pub fn calculate_schedule(
    input: &ContractInput,
) -> ConsorcioResult<ComputationOutput<Schedule>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let terms = ContractTerms::try_from(input)?;

    if terms.admin_fee_annual_rate().is_zero() {
        warnings.push(
            "Administration fee is zero; installment covers credit, reserve fund and insurance only."
                .into(),
        );
    }

    let schedule = Calculator::new(terms).calculate();

    if schedule.installment.is_zero() {
        warnings.push("Installment rounds to zero; term reduction bids are not possible.".into());
    }

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "admin_fee": "simple annual rate prorated by term_months / 12, not compounded",
        "installments": "flat, equal every period",
        "rounding": "2 dp, half to even, applied to outputs",
        "total_cost": "rounded from unrounded installment x term_months"
    });

    Ok(with_metadata(
        "Consórcio flat installment schedule",
        &assumptions,
        warnings,
        elapsed,
        schedule,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn sample_input() -> ContractInput {
        ContractInput {
            credit_amount: dec!(80_000),
            term_months: 12,
            admin_fee_pct: dec!(10),
            reserve_fund_pct: dec!(2.5),
            monthly_insurance: dec!(30),
        }
    }

    #[test]
    fn test_calculate_schedule_envelope() {
        let output = calculate_schedule(&sample_input()).unwrap();
        let s = &output.result;

        // Admin fee = 80,000 * 0.10 * 1 = 8,000
        assert_eq!(s.total_admin_fee, dec!(8000));
        // Reserve = 80,000 * 0.025 = 2,000
        assert_eq!(s.total_reserve_fund, dec!(2000));
        // 90,000 / 12 + 30 = 7,530
        assert_eq!(s.installment, dec!(7530));
        assert_eq!(s.total_cost, dec!(90_360));
        assert!(output.warnings.is_empty());
        assert_eq!(output.metadata.precision, "rust_decimal_128bit");
    }

    #[test]
    fn test_rows_are_numbered_from_one() {
        let output = calculate_schedule(&sample_input()).unwrap();
        let rows: Vec<InstallmentRow> = output.result.rows().collect();

        assert_eq!(rows.len(), 12);
        assert_eq!(rows[0].number, 1);
        assert_eq!(rows[11].number, 12);
        assert!(rows.iter().all(|r| r.amount == dec!(7530)));
    }

    #[test]
    fn test_zero_admin_fee_warns() {
        let mut input = sample_input();
        input.admin_fee_pct = Decimal::ZERO;
        let output = calculate_schedule(&input).unwrap();
        assert!(output
            .warnings
            .iter()
            .any(|w| w.contains("Administration fee is zero")));
    }

    #[test]
    fn test_invalid_term_propagates() {
        let mut input = sample_input();
        input.term_months = 0;
        assert!(calculate_schedule(&input).is_err());
    }
}

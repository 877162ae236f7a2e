use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::bid::{BidSimulation, BidStrategy};
use crate::contract::ContractTerms;
use crate::schedule::Schedule;
use crate::types::*;
use crate::{ConsorcioError, ConsorcioResult};

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Flat-installment consórcio calculator over a fixed set of contract terms.
///
/// Both operations are pure: the same terms always yield the same schedule,
/// and a bid simulation only reads the schedule it is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculator {
    terms: ContractTerms,
}

impl Calculator {
    pub fn new(terms: ContractTerms) -> Self {
        Self { terms }
    }

    pub fn terms(&self) -> &ContractTerms {
        &self.terms
    }

    /// Derive the baseline schedule.
    ///
    /// The administration fee is prorated over the term in years and is not
    /// compounded. Money fields are rounded to cents on output; `total_cost`
    /// is rounded from the unrounded installment times the term.
    pub fn calculate(&self) -> Schedule {
        let terms = &self.terms;
        let months = Decimal::from(terms.term_months());

        let total_admin_fee =
            terms.credit_amount() * terms.admin_fee_annual_rate() * (months / MONTHS_PER_YEAR);
        let total_reserve_fund = terms.credit_amount() * terms.reserve_fund_rate();
        let base_installment =
            (terms.credit_amount() + total_admin_fee + total_reserve_fund) / months;
        let installment = base_installment + terms.monthly_insurance();
        let total_cost = installment * months;

        let rounded_installment = round_money(installment);

        debug!(
            credit_amount = %terms.credit_amount(),
            term_months = terms.term_months(),
            installment = %rounded_installment,
            "schedule calculated"
        );

        Schedule {
            total_admin_fee: round_money(total_admin_fee),
            total_reserve_fund: round_money(total_reserve_fund),
            installment: rounded_installment,
            total_cost: round_money(total_cost),
            installments: vec![rounded_installment; terms.term_months() as usize],
        }
    }

    /// Apply a lump-sum bid against a schedule produced from these terms.
    ///
    /// Works from the schedule's rounded `installment` and `total_cost`.
    pub fn simulate_bid(
        &self,
        bid_amount: Money,
        schedule: &Schedule,
        strategy: BidStrategy,
    ) -> ConsorcioResult<BidSimulation> {
        if bid_amount < Decimal::ZERO {
            return Err(ConsorcioError::InvalidBid { bid_amount });
        }
        if schedule.installments.len() != self.terms.term_months() as usize {
            return Err(ConsorcioError::InvalidInput {
                field: "schedule".into(),
                reason: format!(
                    "Schedule has {} installments but the contract term is {} months.",
                    schedule.installments.len(),
                    self.terms.term_months()
                ),
            });
        }

        let remaining_balance = (schedule.total_cost - bid_amount).max(Decimal::ZERO);

        let simulation = match strategy {
            BidStrategy::ReduceTerm => {
                if schedule.installment <= Decimal::ZERO {
                    return Err(ConsorcioError::DegenerateInstallment);
                }
                let remaining_installments = (remaining_balance / schedule.installment)
                    .floor()
                    .to_u32()
                    .ok_or_else(|| ConsorcioError::InvalidInput {
                        field: "bid_amount".into(),
                        reason: "Remaining installment count is out of range.".into(),
                    })?;
                BidSimulation {
                    strategy,
                    installment: round_money(schedule.installment),
                    remaining_installments,
                    remaining_balance: round_money(remaining_balance),
                }
            }
            BidStrategy::ReduceInstallment => {
                let term_months = self.terms.term_months();
                let new_installment = if term_months == 0 {
                    Decimal::ZERO
                } else {
                    remaining_balance / Decimal::from(term_months)
                };
                BidSimulation {
                    strategy,
                    installment: round_money(new_installment),
                    remaining_installments: term_months,
                    remaining_balance: round_money(remaining_balance),
                }
            }
        };

        debug!(
            bid_amount = %bid_amount,
            strategy = ?strategy,
            remaining_balance = %simulation.remaining_balance,
            remaining_installments = simulation.remaining_installments,
            "bid simulated"
        );

        Ok(simulation)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// 0.8% a year over 5 years: a 2,000 fee on 50,000.
    fn reference_calculator() -> Calculator {
        let terms =
            ContractTerms::from_percentages(dec!(50_000), 60, dec!(0.8), dec!(0), dec!(0)).unwrap();
        Calculator::new(terms)
    }

    #[test]
    fn test_reference_schedule() {
        let schedule = reference_calculator().calculate();

        // Admin fee = 50,000 * 0.008 * 5 years = 2,000
        assert_eq!(schedule.total_admin_fee, dec!(2000));
        assert_eq!(schedule.total_reserve_fund, dec!(0));
        // (50,000 + 2,000) / 60 = 866.666...
        assert_eq!(schedule.installment, dec!(866.67));
        assert_eq!(schedule.total_cost, dec!(52000));
        assert_eq!(schedule.installments.len(), 60);
    }

    #[test]
    fn test_eight_percent_fee_prorated_over_five_years() {
        let terms =
            ContractTerms::from_percentages(dec!(50_000), 60, dec!(8), dec!(0), dec!(0)).unwrap();
        let calc = Calculator::new(terms);
        let schedule = calc.calculate();

        // Admin fee = 50,000 * 0.08 * 5 years = 20,000
        assert_eq!(schedule.total_admin_fee, dec!(20_000));
        // 70,000 / 60 = 1,166.666...
        assert_eq!(schedule.installment, dec!(1166.67));
        assert_eq!(schedule.total_cost, dec!(70_000));

        let sim = calc
            .simulate_bid(dec!(20_000), &schedule, BidStrategy::ReduceTerm)
            .unwrap();
        // floor(50,000 / 1,166.67) = 42
        assert_eq!(sim.remaining_installments, 42);
    }

    #[test]
    fn test_reserve_fund_and_insurance() {
        let terms =
            ContractTerms::from_percentages(dec!(100_000), 100, dec!(12), dec!(3), dec!(25))
                .unwrap();
        let schedule = Calculator::new(terms).calculate();

        // Admin fee = 100,000 * 0.12 * (100 / 12) = 100,000
        assert_eq!(schedule.total_admin_fee, dec!(100_000));
        // Reserve = 100,000 * 0.03 = 3,000
        assert_eq!(schedule.total_reserve_fund, dec!(3000));
        // (100,000 + 100,000 + 3,000) / 100 + 25 = 2,055
        assert_eq!(schedule.installment, dec!(2055));
        assert_eq!(schedule.total_cost, dec!(205_500));
    }

    #[test]
    fn test_reduce_term_reference_bid() {
        let calc = reference_calculator();
        let schedule = calc.calculate();
        let sim = calc
            .simulate_bid(dec!(20_000), &schedule, BidStrategy::ReduceTerm)
            .unwrap();

        assert_eq!(sim.remaining_balance, dec!(32000));
        assert_eq!(sim.installment, dec!(866.67));
        // floor(32,000 / 866.67) = 36
        assert_eq!(sim.remaining_installments, 36);
    }

    #[test]
    fn test_reduce_installment_reference_bid() {
        let calc = reference_calculator();
        let schedule = calc.calculate();
        let sim = calc
            .simulate_bid(dec!(20_000), &schedule, BidStrategy::ReduceInstallment)
            .unwrap();

        assert_eq!(sim.remaining_balance, dec!(32000));
        assert_eq!(sim.installment, dec!(533.33));
        assert_eq!(sim.remaining_installments, 60);
    }

    #[test]
    fn test_bid_above_total_cost_settles_contract() {
        let calc = reference_calculator();
        let schedule = calc.calculate();

        let term = calc
            .simulate_bid(dec!(60_000), &schedule, BidStrategy::ReduceTerm)
            .unwrap();
        assert_eq!(term.remaining_balance, Decimal::ZERO);
        assert_eq!(term.remaining_installments, 0);

        let inst = calc
            .simulate_bid(dec!(60_000), &schedule, BidStrategy::ReduceInstallment)
            .unwrap();
        assert_eq!(inst.remaining_balance, Decimal::ZERO);
        assert_eq!(inst.installment, Decimal::ZERO);
    }

    #[test]
    fn test_negative_bid_rejected() {
        let calc = reference_calculator();
        let schedule = calc.calculate();
        let err = calc
            .simulate_bid(dec!(-1), &schedule, BidStrategy::ReduceTerm)
            .unwrap_err();
        assert!(matches!(err, ConsorcioError::InvalidBid { .. }));
    }

    #[test]
    fn test_zero_installment_is_degenerate_under_reduce_term() {
        // 0.001 spread over 60 months rounds to a zero installment
        let terms =
            ContractTerms::from_percentages(dec!(0.001), 60, dec!(0), dec!(0), dec!(0)).unwrap();
        let calc = Calculator::new(terms);
        let schedule = calc.calculate();
        assert_eq!(schedule.installment, Decimal::ZERO);

        let err = calc
            .simulate_bid(dec!(0), &schedule, BidStrategy::ReduceTerm)
            .unwrap_err();
        assert!(matches!(err, ConsorcioError::DegenerateInstallment));

        // Reducing the installment instead stays well defined
        let sim = calc
            .simulate_bid(dec!(0), &schedule, BidStrategy::ReduceInstallment)
            .unwrap();
        assert_eq!(sim.installment, Decimal::ZERO);
    }

    #[test]
    fn test_schedule_from_other_contract_rejected() {
        let calc = reference_calculator();
        let other = ContractTerms::from_percentages(dec!(50_000), 48, dec!(8), dec!(0), dec!(0))
            .unwrap();
        let foreign = Calculator::new(other).calculate();

        let err = calc
            .simulate_bid(dec!(1000), &foreign, BidStrategy::ReduceInstallment)
            .unwrap_err();
        match err {
            ConsorcioError::InvalidInput { field, .. } => assert_eq!(field, "schedule"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_calculate_is_idempotent() {
        let calc = reference_calculator();
        assert_eq!(calc.calculate(), calc.calculate());
    }
}

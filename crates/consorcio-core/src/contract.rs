use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::{types::*, ConsorcioError, ConsorcioResult};

const PERCENT: Decimal = dec!(100);

/// Longest accepted term: 100 years.
pub const MAX_TERM_MONTHS: u32 = 1200;

/// Ceiling on credit and insurance amounts, keeping every product well inside
/// Decimal range.
pub const MAX_AMOUNT: Money = dec!(1_000_000_000_000_000);

/// Ceiling on fee and reserve percentages.
pub const MAX_PERCENT: Percent = dec!(1000);

// ---------------------------------------------------------------------------
// Input / validated terms
// ---------------------------------------------------------------------------

/// Contract parameters as a caller supplies them: fee and reserve fund in
/// whole-number percentages (8 = 8%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractInput {
    pub credit_amount: Money,
    pub term_months: u32,
    pub admin_fee_pct: Percent,
    #[serde(default)]
    pub reserve_fund_pct: Percent,
    #[serde(default)]
    pub monthly_insurance: Money,
}

/// Validated, immutable contract terms. Rates are held as fractions of 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractTerms {
    credit_amount: Money,
    term_months: u32,
    admin_fee_annual_rate: Rate,
    reserve_fund_rate: Rate,
    monthly_insurance: Money,
}

impl ContractTerms {
    /// Build terms from whole-number percentages. Zero or overlong terms and
    /// out-of-range amounts or rates are rejected.
    pub fn from_percentages(
        credit_amount: Money,
        term_months: u32,
        admin_fee_pct: Percent,
        reserve_fund_pct: Percent,
        monthly_insurance: Money,
    ) -> ConsorcioResult<Self> {
        if credit_amount <= Decimal::ZERO {
            return Err(ConsorcioError::InvalidInput {
                field: "credit_amount".into(),
                reason: "Credit amount must be positive.".into(),
            });
        }
        if credit_amount > MAX_AMOUNT {
            return Err(ConsorcioError::InvalidInput {
                field: "credit_amount".into(),
                reason: format!("Credit amount cannot exceed {MAX_AMOUNT}."),
            });
        }
        if term_months == 0 || term_months > MAX_TERM_MONTHS {
            return Err(ConsorcioError::InvalidTerm { term_months });
        }
        check_percent("admin_fee_pct", "Administration fee", admin_fee_pct)?;
        check_percent("reserve_fund_pct", "Reserve fund", reserve_fund_pct)?;
        if monthly_insurance < Decimal::ZERO || monthly_insurance > MAX_AMOUNT {
            return Err(ConsorcioError::InvalidInput {
                field: "monthly_insurance".into(),
                reason: format!("Monthly insurance must be between 0 and {MAX_AMOUNT}."),
            });
        }

        Ok(Self {
            credit_amount,
            term_months,
            admin_fee_annual_rate: admin_fee_pct / PERCENT,
            reserve_fund_rate: reserve_fund_pct / PERCENT,
            monthly_insurance,
        })
    }

    pub fn credit_amount(&self) -> Money {
        self.credit_amount
    }

    pub fn term_months(&self) -> u32 {
        self.term_months
    }

    pub fn admin_fee_annual_rate(&self) -> Rate {
        self.admin_fee_annual_rate
    }

    pub fn reserve_fund_rate(&self) -> Rate {
        self.reserve_fund_rate
    }

    pub fn monthly_insurance(&self) -> Money {
        self.monthly_insurance
    }
}

fn check_percent(field: &str, label: &str, value: Percent) -> ConsorcioResult<()> {
    if value < Decimal::ZERO || value > MAX_PERCENT {
        return Err(ConsorcioError::InvalidInput {
            field: field.into(),
            reason: format!("{label} must be between 0% and {MAX_PERCENT}%."),
        });
    }
    Ok(())
}

impl TryFrom<&ContractInput> for ContractTerms {
    type Error = ConsorcioError;

    fn try_from(input: &ContractInput) -> ConsorcioResult<Self> {
        ContractTerms::from_percentages(
            input.credit_amount,
            input.term_months,
            input.admin_fee_pct,
            input.reserve_fund_pct,
            input.monthly_insurance,
        )
    }
}

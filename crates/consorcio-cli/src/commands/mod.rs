pub mod bid;
pub mod schedule;

use clap::Args;
use rust_decimal::Decimal;

use consorcio_core::ContractInput;

use crate::input::currency::{parse_money, parse_percent};

/// Contract terms shared by every subcommand.
#[derive(Args)]
pub struct ContractArgs {
    /// Credit amount (e.g. 50000 or "R$ 50.000,00")
    #[arg(long, alias = "valor-credito", value_parser = parse_money, allow_hyphen_values = true)]
    pub credit: Option<Decimal>,

    /// Term in months
    #[arg(long, alias = "prazo")]
    pub term: Option<u32>,

    /// Administration fee, % per year (e.g. 8 or 8,5)
    #[arg(long, alias = "taxa-adm", value_parser = parse_percent, allow_hyphen_values = true)]
    pub admin_fee: Option<Decimal>,

    /// Reserve fund, % of credit
    #[arg(
        long,
        alias = "fundo-reserva",
        value_parser = parse_percent,
        allow_hyphen_values = true,
        default_value = "0"
    )]
    pub reserve_fund: Decimal,

    /// Monthly insurance amount
    #[arg(
        long,
        alias = "seguro",
        value_parser = parse_money,
        allow_hyphen_values = true,
        default_value = "0"
    )]
    pub insurance: Decimal,
}

impl ContractArgs {
    pub fn to_input(&self) -> Result<ContractInput, Box<dyn std::error::Error>> {
        Ok(ContractInput {
            credit_amount: self
                .credit
                .ok_or("--credit is required (or provide --input)")?,
            term_months: self.term.ok_or("--term is required (or provide --input)")?,
            admin_fee_pct: self
                .admin_fee
                .ok_or("--admin-fee is required (or provide --input)")?,
            reserve_fund_pct: self.reserve_fund,
            monthly_insurance: self.insurance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use rust_decimal_macros::dec;

    #[derive(Parser)]
    struct ContractCli {
        #[command(flatten)]
        contract: ContractArgs,
    }

    fn parse(args: &[&str]) -> Result<ContractArgs, clap::Error> {
        let argv = std::iter::once("consorcio").chain(args.iter().copied());
        ContractCli::try_parse_from(argv).map(|cli| cli.contract)
    }

    #[test]
    fn test_flag_is_not_swallowed_as_a_value() {
        assert!(parse(&["--term", "--admin-fee", "8"]).is_err());
    }

    #[test]
    fn test_negative_amounts_reach_validation() {
        let args = parse(&["--credit", "-100", "--admin-fee", "-1"]).unwrap();
        assert_eq!(args.credit, Some(dec!(-100)));
        assert_eq!(args.admin_fee, Some(dec!(-1)));
    }

    #[test]
    fn test_localized_flags() {
        let args = parse(&[
            "--credit",
            "R$ 50.000,00",
            "--term",
            "60",
            "--admin-fee",
            "0,8",
            "--reserve-fund",
            "2,5%",
        ])
        .unwrap();
        let input = args.to_input().unwrap();
        assert_eq!(input.credit_amount, dec!(50000));
        assert_eq!(input.term_months, 60);
        assert_eq!(input.admin_fee_pct, dec!(0.8));
        assert_eq!(input.reserve_fund_pct, dec!(2.5));
        assert_eq!(input.monthly_insurance, dec!(0));
    }

    #[test]
    fn test_missing_required_flag() {
        let args = parse(&["--credit", "50000", "--term", "60"]).unwrap();
        let err = args.to_input().unwrap_err();
        assert!(err.to_string().contains("--admin-fee"));
    }
}

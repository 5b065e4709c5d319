//! Built-in walkthrough: one account of each kind

use anyhow::{Context, Result};
use feebank_core::{AccountKind, AccountSpec, Bank, BankConfig, Scenario, ScenarioBuilder};
use feebank_reports::{account_summary, OutcomeExporter, TextExporter};
use rust_decimal::Decimal;

/// The walkthrough scenario
pub fn scenario() -> Scenario {
    ScenarioBuilder::new()
        .open(AccountSpec::new("Checking", AccountKind::Standard, Decimal::new(100, 0)))
        .open(AccountSpec::new("Rewards", AccountKind::BonusDeposit, Decimal::ZERO))
        .open(AccountSpec::new("Savings", AccountKind::FeeSavings, Decimal::new(100, 0)))
        .balance("Checking")
        .withdraw("Checking", Decimal::new(50, 0))
        .deposit("Rewards", Decimal::new(100, 0))
        .withdraw("Savings", Decimal::new(20, 0))
        .transfer("Savings", "Checking", Decimal::new(30, 0))
        .transfer("Checking", "Rewards", Decimal::new(500, 0))
        .withdraw("Rewards", Decimal::new(200, 0))
        .build()
}

pub fn run(config: BankConfig) -> Result<()> {
    let mut bank = Bank::new(config);
    let outcomes = bank.run(&scenario()).context("Demo scenario aborted")?;

    let exporter = TextExporter::new();
    for outcome in &outcomes {
        println!("{}\n", exporter.export(outcome));
    }
    println!("{}", account_summary(bank.accounts()));

    Ok(())
}

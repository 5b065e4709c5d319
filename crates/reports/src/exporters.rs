//! Outcome exporters - human-readable text and JSON

use feebank_core::{
    BalanceSnapshot, DepositReceipt, StepOutcome, TransferReceipt, WithdrawalReceipt,
};
use rust_decimal::Decimal;

/// Trait for exporting step outcomes to a target format
pub trait OutcomeExporter {
    /// Export a single outcome
    fn export(&self, outcome: &StepOutcome) -> String;

    /// Export a whole run
    fn export_all(&self, outcomes: &[StepOutcome]) -> String {
        outcomes
            .iter()
            .map(|o| self.export(o))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Format an amount as dollars with two decimals, e.g. `$47.00`
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    if rounded < Decimal::ZERO {
        format!("-${:.2}", rounded.abs())
    } else {
        format!("${:.2}", rounded)
    }
}

// ============================================================================
// Text Exporter
// ============================================================================

/// Status text exporter
#[derive(Debug, Default, Clone, Copy)]
pub struct TextExporter;

impl TextExporter {
    pub fn new() -> Self {
        Self
    }

    fn balance_line(account: &str, balance: Decimal) -> String {
        format!("Account '{}' balance = {}", account, format_amount(balance))
    }

    fn snapshot(snapshot: &BalanceSnapshot) -> String {
        Self::balance_line(&snapshot.account, snapshot.balance)
    }

    fn deposit(receipt: &DepositReceipt) -> String {
        let bonus = receipt.bonus();
        let headline = if bonus > Decimal::ZERO {
            format!("Deposit complete with a {} bonus.", format_amount(bonus))
        } else {
            "Deposit complete.".to_string()
        };
        format!(
            "{}\n{}",
            headline,
            Self::balance_line(&receipt.account, receipt.balance_after)
        )
    }

    fn withdrawal(receipt: &WithdrawalReceipt) -> String {
        format!(
            "Withdraw complete with a {} fee.\n{}",
            format_amount(receipt.fee),
            Self::balance_line(&receipt.account, receipt.balance_after)
        )
    }

    fn transfer(receipt: &TransferReceipt) -> String {
        format!(
            "Beginning transfer...\n{}\n{}\nTransfer complete!",
            Self::withdrawal(&receipt.withdrawal),
            Self::deposit(&receipt.deposit)
        )
    }
}

impl OutcomeExporter for TextExporter {
    fn export(&self, outcome: &StepOutcome) -> String {
        match outcome {
            StepOutcome::Opened { snapshot, .. } => format!(
                "Account '{}' created.\nBalance = {}",
                snapshot.account,
                format_amount(snapshot.balance)
            ),
            StepOutcome::Balance(snapshot) => Self::snapshot(snapshot),
            StepOutcome::Deposited(receipt) => Self::deposit(receipt),
            StepOutcome::Withdrew(receipt) => Self::withdrawal(receipt),
            StepOutcome::Transferred(receipt) => Self::transfer(receipt),
            StepOutcome::DepositRejected { reason, .. } => {
                format!("Deposit interrupted: {}", reason)
            }
            StepOutcome::WithdrawRejected { reason, .. } => {
                format!("Withdraw interrupted: {}", reason)
            }
            StepOutcome::TransferRejected { reason, .. } => {
                format!("Beginning transfer...\nTransfer interrupted: {}", reason)
            }
        }
    }
}

// ============================================================================
// JSON Exporter
// ============================================================================

/// JSON exporter
#[derive(Debug, Clone, Copy)]
pub struct JsonExporter {
    pretty: bool,
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl JsonExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    fn render<T: serde::Serialize + ?Sized>(&self, value: &T) -> serde_json::Result<String> {
        if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        }
    }

    /// Export a single outcome
    pub fn export(&self, outcome: &StepOutcome) -> serde_json::Result<String> {
        self.render(outcome)
    }

    /// Export a whole run as a JSON array
    pub fn export_all(&self, outcomes: &[StepOutcome]) -> serde_json::Result<String> {
        self.render(outcomes)
    }
}

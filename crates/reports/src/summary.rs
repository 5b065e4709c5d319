//! Closing balance summary

use crate::exporters::format_amount;
use feebank_core::Account;
use rust_decimal::Decimal;

/// Markdown table of accounts with kind, withdrawal fee and balance
pub fn account_summary<'a>(accounts: impl IntoIterator<Item = &'a Account>) -> String {
    let mut out = String::from("| Account | Kind | Withdrawal fee | Balance |\n");
    out.push_str("|---|---|---|---|\n");

    let mut total = Decimal::ZERO;
    for account in accounts {
        total += account.balance();
        out.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            account.name(),
            account.kind(),
            format_amount(account.withdrawal_fee(Decimal::ZERO)),
            format_amount(account.balance())
        ));
    }
    out.push_str(&format!("| **Total** | | | {} |", format_amount(total)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_summary_lists_accounts_and_total() {
        let accounts = vec![
            Account::standard("Checking", dec!(47)),
            Account::fee_savings("Savings", dec!(75)),
        ];
        let table = account_summary(&accounts);

        assert!(table.contains("| Checking | standard | $3.00 | $47.00 |"));
        assert!(table.contains("| Savings | fee_savings | $5.00 | $75.00 |"));
        assert!(table.ends_with("| **Total** | | | $122.00 |"));
    }

    #[test]
    fn test_empty_summary() {
        let table = account_summary(Vec::<&Account>::new());
        assert!(table.ends_with("$0.00 |"));
    }
}

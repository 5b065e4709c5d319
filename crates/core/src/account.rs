//! # Account Module
//!
//! Định nghĩa Account - tài khoản có tên hiển thị và một số dư.
//! Hành vi gửi/rút phụ thuộc vào [`AccountPolicy`] của tài khoản.

use crate::config::BankConfig;
use crate::error::{AccountError, AccountResult};
use crate::policy::{AccountKind, AccountPolicy, DepositCalculator, FeeCalculator};
use crate::receipt::{BalanceSnapshot, DepositReceipt, TransferReceipt, WithdrawalReceipt};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

/// Tài khoản ngân hàng.
///
/// `balance` chỉ thay đổi qua [`deposit`](Account::deposit),
/// [`withdraw`](Account::withdraw) và [`transfer`](Account::transfer).
/// Một thao tác bị từ chối không làm thay đổi số dư.
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    name: String,
    kind: AccountKind,
    policy: AccountPolicy,
    balance: Decimal,
    opened_at: DateTime<Utc>,
}

impl Account {
    /// Tạo tài khoản mới với policy giải từ `config`
    pub fn new(
        name: impl Into<String>,
        initial_balance: Decimal,
        kind: AccountKind,
        config: &BankConfig,
    ) -> Self {
        let name = name.into();
        debug!(account = %name, %kind, balance = %initial_balance, "account opened");
        Self {
            name,
            kind,
            policy: kind.policy(config),
            balance: initial_balance,
            opened_at: Utc::now(),
        }
    }

    /// Tài khoản thường với cấu hình mặc định
    pub fn standard(name: impl Into<String>, initial_balance: Decimal) -> Self {
        Self::new(name, initial_balance, AccountKind::Standard, &BankConfig::default())
    }

    /// Tài khoản thưởng gửi tiền với cấu hình mặc định
    pub fn bonus_deposit(name: impl Into<String>, initial_balance: Decimal) -> Self {
        Self::new(name, initial_balance, AccountKind::BonusDeposit, &BankConfig::default())
    }

    /// Tài khoản tiết kiệm có phí riêng (mặc định 5)
    pub fn fee_savings(name: impl Into<String>, initial_balance: Decimal) -> Self {
        Self::new(name, initial_balance, AccountKind::FeeSavings, &BankConfig::default())
    }

    /// Đặt phí rút riêng cho tài khoản tiết kiệm.
    ///
    /// Chỉ `FeeSavings` có phí theo từng tài khoản; các loại khác dùng phí cố định.
    pub fn with_withdrawal_fee(mut self, fee: Decimal) -> AccountResult<Self> {
        if self.kind != AccountKind::FeeSavings {
            return Err(AccountError::FixedWithdrawalFee {
                account: self.name,
                kind: self.kind,
            });
        }
        ensure_non_negative(fee)?;

        self.policy = self.policy.with_flat_fee(fee);
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn policy(&self) -> &AccountPolicy {
        &self.policy
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Số dư hiện tại
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Phí áp dụng cho một lần rút `amount`
    pub fn withdrawal_fee(&self, amount: Decimal) -> Decimal {
        self.policy.withdrawal_fee(amount)
    }

    pub fn snapshot(&self) -> BalanceSnapshot {
        BalanceSnapshot {
            account: self.name.clone(),
            balance: self.balance,
            at: Utc::now(),
        }
    }

    /// Tính trước số tiền ghi có và số dư mới cho một lần gửi
    fn plan_deposit(&self, amount: Decimal) -> AccountResult<(Decimal, Decimal)> {
        let overflow = || AccountError::overflow(&self.name, amount);
        let credited = self.policy.credited_amount(amount).ok_or_else(overflow)?;
        let balance_after = self.balance.checked_add(credited).ok_or_else(overflow)?;
        Ok((credited, balance_after))
    }

    /// Tính trước phí, tổng tiền trừ và số dư mới cho một lần rút
    fn plan_withdrawal(&self, amount: Decimal) -> AccountResult<(Decimal, Decimal, Decimal)> {
        let overflow = || AccountError::overflow(&self.name, amount);
        let fee = self.policy.withdrawal_fee(amount);
        let total = self.policy.withdrawal_total(amount).ok_or_else(overflow)?;
        self.check_viable(total)?;
        let balance_after = self.balance.checked_sub(total).ok_or_else(overflow)?;
        Ok((fee, total, balance_after))
    }

    /// Gửi tiền. Số tiền ghi có tùy theo deposit policy.
    pub fn deposit(&mut self, amount: Decimal) -> AccountResult<DepositReceipt> {
        ensure_non_negative(amount)?;

        let (credited, balance_after) = self.plan_deposit(amount)?;
        self.balance = balance_after;
        debug!(account = %self.name, %amount, %credited, balance = %self.balance, "deposit");

        Ok(DepositReceipt {
            account: self.name.clone(),
            amount,
            credited,
            balance_after: self.balance,
            at: Utc::now(),
        })
    }

    /// Kiểm tra số dư đủ cho một khoản trừ `amount`. Không thay đổi trạng thái.
    pub fn check_viable(&self, amount: Decimal) -> AccountResult<()> {
        if self.balance < amount {
            return Err(AccountError::insufficient_funds(
                &self.name,
                amount,
                self.balance,
            ));
        }
        Ok(())
    }

    /// Rút tiền: trừ `amount + fee` nếu đủ số dư.
    pub fn withdraw(&mut self, amount: Decimal) -> AccountResult<WithdrawalReceipt> {
        ensure_non_negative(amount)?;

        let (fee, total, balance_after) = match self.plan_withdrawal(amount) {
            Ok(plan) => plan,
            Err(err) => {
                warn!(account = %self.name, %amount, balance = %self.balance, error = %err, "withdrawal rejected");
                return Err(err);
            }
        };
        self.balance = balance_after;
        debug!(account = %self.name, %amount, %fee, balance = %self.balance, "withdrawal");

        Ok(WithdrawalReceipt {
            account: self.name.clone(),
            amount,
            fee,
            total,
            balance_after: self.balance,
            at: Utc::now(),
        })
    }

    /// Chuyển `amount` sang `target`.
    ///
    /// Cả hai chân được kiểm tra trước (số dư đủ cho amount + phí của bên gửi,
    /// bên nhận không tràn số), nên hoặc cả hai cùng thực hiện hoặc không chân nào.
    pub fn transfer(
        &mut self,
        amount: Decimal,
        target: &mut Account,
    ) -> AccountResult<TransferReceipt> {
        ensure_non_negative(amount)?;

        let checked = self
            .plan_withdrawal(amount)
            .and_then(|_| target.plan_deposit(amount));
        if let Err(err) = checked {
            warn!(from = %self.name, to = %target.name, %amount, error = %err, "transfer rejected");
            return Err(err);
        }

        let withdrawal = self.withdraw(amount)?;
        let deposit = target.deposit(amount)?;
        debug!(from = %self.name, to = %target.name, %amount, "transfer");

        Ok(TransferReceipt {
            amount,
            withdrawal,
            deposit,
        })
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account '{}' ({}, balance: {})",
            self.name, self.kind, self.balance
        )
    }
}

fn ensure_non_negative(amount: Decimal) -> AccountResult<()> {
    if amount < Decimal::ZERO {
        return Err(AccountError::NegativeAmount(amount));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_account_creation() {
        let account = Account::standard("Checking", dec!(100));

        assert_eq!(account.name(), "Checking");
        assert_eq!(account.kind(), AccountKind::Standard);
        assert_eq!(account.balance(), dec!(100));
        assert_eq!(account.withdrawal_fee(dec!(1)), dec!(3));
    }

    #[test]
    fn test_standard_deposit() {
        let mut account = Account::standard("Checking", dec!(100));
        let receipt = account.deposit(dec!(25.50)).unwrap();

        assert_eq!(receipt.credited, dec!(25.50));
        assert_eq!(receipt.bonus(), Decimal::ZERO);
        assert_eq!(account.balance(), dec!(125.50));
    }

    #[test]
    fn test_zero_deposit_is_allowed() {
        let mut account = Account::standard("Checking", dec!(10));
        account.deposit(Decimal::ZERO).unwrap();
        assert_eq!(account.balance(), dec!(10));
    }

    #[test]
    fn test_bonus_deposit() {
        let mut account = Account::bonus_deposit("Rewards", dec!(0));
        let receipt = account.deposit(dec!(100)).unwrap();

        assert_eq!(receipt.credited, dec!(105.0));
        assert_eq!(receipt.bonus(), dec!(5));
        assert_eq!(account.balance(), dec!(105.0));
    }

    #[test]
    fn test_withdraw_with_flat_fee() {
        let mut account = Account::standard("Checking", dec!(100));
        let receipt = account.withdraw(dec!(50)).unwrap();

        assert_eq!(receipt.fee, dec!(3));
        assert_eq!(receipt.total, dec!(53));
        assert_eq!(receipt.balance_after, dec!(47));
        assert_eq!(account.balance(), dec!(47));
    }

    #[test]
    fn test_withdraw_exact_balance() {
        let mut account = Account::standard("Checking", dec!(53));
        account.withdraw(dec!(50)).unwrap();
        assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[test]
    fn test_withdraw_insufficient() {
        let mut account = Account::standard("Checking", dec!(10));
        let err = account.withdraw(dec!(50)).unwrap_err();

        assert_eq!(
            err,
            AccountError::InsufficientFunds {
                account: "Checking".to_string(),
                requested: dec!(53),
                available: dec!(10),
            }
        );
        assert_eq!(account.balance(), dec!(10));
    }

    #[test]
    fn test_fee_only_shortfall_is_rejected() {
        // 50 is covered but 50 + 3 is not
        let mut account = Account::standard("Checking", dec!(52));
        assert!(account.withdraw(dec!(50)).is_err());
        assert_eq!(account.balance(), dec!(52));
    }

    #[test]
    fn test_fee_savings_withdraw() {
        let mut account = Account::fee_savings("Savings", dec!(100));
        let receipt = account.withdraw(dec!(20)).unwrap();

        assert_eq!(receipt.fee, dec!(5));
        assert_eq!(account.balance(), dec!(75));
    }

    #[test]
    fn test_fee_savings_custom_fee() {
        let mut account = Account::fee_savings("Savings", dec!(100))
            .with_withdrawal_fee(dec!(1))
            .unwrap();
        account.withdraw(dec!(20)).unwrap();
        assert_eq!(account.balance(), dec!(79));
    }

    #[test]
    fn test_fixed_fee_kinds_reject_override() {
        for account in [
            Account::standard("Checking", dec!(100)),
            Account::bonus_deposit("Rewards", dec!(100)),
        ] {
            let kind = account.kind();
            let err = account.with_withdrawal_fee(dec!(0)).unwrap_err();
            assert!(matches!(
                err,
                AccountError::FixedWithdrawalFee { kind: k, .. } if k == kind
            ));
        }
    }

    #[test]
    fn test_negative_fee_override_rejected() {
        let err = Account::fee_savings("Savings", dec!(100))
            .with_withdrawal_fee(dec!(-1))
            .unwrap_err();
        assert_eq!(err, AccountError::NegativeAmount(dec!(-1)));
    }

    #[test]
    fn test_withdraw_overflow_is_rejected() {
        let mut account = Account::standard("Checking", dec!(10));
        let err = account.withdraw(Decimal::MAX).unwrap_err();

        assert_eq!(err, AccountError::overflow("Checking", Decimal::MAX));
        assert_eq!(account.balance(), dec!(10));
    }

    #[test]
    fn test_deposit_overflow_is_rejected() {
        let mut bonus = Account::bonus_deposit("Rewards", dec!(10));
        assert!(matches!(
            bonus.deposit(Decimal::MAX),
            Err(AccountError::AmountOverflow { .. })
        ));
        assert_eq!(bonus.balance(), dec!(10));

        // the amount itself fits, the new balance does not
        let mut standard = Account::standard("Checking", dec!(10));
        assert!(matches!(
            standard.deposit(Decimal::MAX),
            Err(AccountError::AmountOverflow { .. })
        ));
        assert_eq!(standard.balance(), dec!(10));
    }

    #[test]
    fn test_transfer_overflow_moves_nothing() {
        let mut source = Account::standard("Checking", dec!(200));
        let mut target = Account::standard("Other", Decimal::MAX);

        let err = source.transfer(dec!(100), &mut target).unwrap_err();

        assert!(matches!(err, AccountError::AmountOverflow { ref account, .. } if account == "Other"));
        assert_eq!(source.balance(), dec!(200));
        assert_eq!(target.balance(), Decimal::MAX);
    }

    #[test]
    fn test_fee_savings_keeps_bonus_deposit() {
        let mut account = Account::fee_savings("Savings", dec!(0));
        account.deposit(dec!(200)).unwrap();
        assert_eq!(account.balance(), dec!(210));
    }

    #[test]
    fn test_negative_amounts_rejected() {
        let mut account = Account::standard("Checking", dec!(100));
        let mut other = Account::standard("Other", dec!(0));

        assert_eq!(
            account.deposit(dec!(-1)).unwrap_err(),
            AccountError::NegativeAmount(dec!(-1))
        );
        assert!(account.withdraw(dec!(-1)).is_err());
        assert!(account.transfer(dec!(-1), &mut other).is_err());
        assert_eq!(account.balance(), dec!(100));
        assert_eq!(other.balance(), dec!(0));
    }

    #[test]
    fn test_check_viable_is_pure() {
        let account = Account::standard("Checking", dec!(10));
        assert!(account.check_viable(dec!(10)).is_ok());
        assert!(account.check_viable(dec!(10.01)).is_err());
        assert_eq!(account.balance(), dec!(10));
    }

    #[test]
    fn test_transfer_applies_both_rules() {
        let mut source = Account::standard("Checking", dec!(100));
        let mut target = Account::bonus_deposit("Rewards", dec!(0));

        let receipt = source.transfer(dec!(40), &mut target).unwrap();

        assert_eq!(receipt.from_account(), "Checking");
        assert_eq!(receipt.to_account(), "Rewards");
        assert_eq!(source.balance(), dec!(57));
        assert_eq!(target.balance(), dec!(42));
    }

    #[test]
    fn test_transfer_rejected_when_fee_not_covered() {
        let mut source = Account::standard("Checking", dec!(41));
        let mut target = Account::standard("Other", dec!(5));

        let err = source.transfer(dec!(40), &mut target).unwrap_err();

        assert!(err.is_insufficient_funds());
        assert_eq!(source.balance(), dec!(41));
        assert_eq!(target.balance(), dec!(5));
    }

    #[test]
    fn test_display() {
        let account = Account::fee_savings("Savings", dec!(12.5));
        assert_eq!(
            account.to_string(),
            "Account 'Savings' (fee_savings, balance: 12.5)"
        );
    }
}

//! # Policy Module
//!
//! Các quy tắc gửi tiền và phí rút tiền cho từng loại tài khoản.
//!
//! Thay vì chuỗi kế thừa Standard -> BonusDeposit -> FeeSavings, mỗi loại
//! tài khoản được giải thành một [`AccountPolicy`] gồm hai chiến lược độc lập:
//! [`DepositPolicy`] và [`FeePolicy`].

use crate::config::BankConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trait cho tính số tiền thực ghi có khi gửi tiền
pub trait DepositCalculator {
    /// Số tiền được cộng vào số dư cho một khoản gửi `amount`.
    /// Trả về `None` nếu phép tính tràn số.
    fn credited_amount(&self, amount: Decimal) -> Option<Decimal>;
}

/// Trait cho tính phí rút tiền
pub trait FeeCalculator {
    /// Phí áp dụng cho một lần rút `amount`
    fn withdrawal_fee(&self, amount: Decimal) -> Decimal;

    /// Tổng số tiền bị trừ khỏi số dư (amount + fee), `None` nếu tràn số
    fn withdrawal_total(&self, amount: Decimal) -> Option<Decimal> {
        amount.checked_add(self.withdrawal_fee(amount))
    }
}

/// Loại tài khoản
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    /// Tài khoản thường: gửi 1:1, phí rút cố định
    Standard,
    /// Gửi tiền được thưởng theo hệ số, phí rút cố định
    BonusDeposit,
    /// Gửi tiền có thưởng, phí rút riêng cho từng tài khoản
    FeeSavings,
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Standard => "standard",
            AccountKind::BonusDeposit => "bonus_deposit",
            AccountKind::FeeSavings => "fee_savings",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "standard" => Some(AccountKind::Standard),
            "bonus_deposit" | "bonus" => Some(AccountKind::BonusDeposit),
            "fee_savings" | "savings" => Some(AccountKind::FeeSavings),
            _ => None,
        }
    }

    pub fn all() -> [AccountKind; 3] {
        [
            AccountKind::Standard,
            AccountKind::BonusDeposit,
            AccountKind::FeeSavings,
        ]
    }

    /// Giải loại tài khoản thành policy theo cấu hình
    pub fn policy(&self, config: &BankConfig) -> AccountPolicy {
        match self {
            AccountKind::Standard => AccountPolicy {
                deposit: DepositPolicy::Plain,
                withdrawal_fee: FeePolicy::Flat(config.standard_withdrawal_fee),
            },
            AccountKind::BonusDeposit => AccountPolicy {
                deposit: DepositPolicy::Bonus {
                    multiplier: config.bonus_multiplier,
                },
                withdrawal_fee: FeePolicy::Flat(config.bonus_withdrawal_fee),
            },
            AccountKind::FeeSavings => AccountPolicy {
                deposit: DepositPolicy::Bonus {
                    multiplier: config.bonus_multiplier,
                },
                withdrawal_fee: FeePolicy::Flat(config.savings_withdrawal_fee),
            },
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Chiến lược gửi tiền
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DepositPolicy {
    /// Ghi có đúng số tiền gửi
    Plain,
    /// Ghi có `amount * multiplier`
    Bonus { multiplier: Decimal },
}

impl DepositCalculator for DepositPolicy {
    fn credited_amount(&self, amount: Decimal) -> Option<Decimal> {
        match self {
            DepositPolicy::Plain => Some(amount),
            DepositPolicy::Bonus { multiplier } => amount.checked_mul(*multiplier),
        }
    }
}

/// Chiến lược phí rút tiền
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "amount", rename_all = "snake_case")]
pub enum FeePolicy {
    /// Phí cố định cho mỗi lần rút
    Flat(Decimal),
}

impl FeeCalculator for FeePolicy {
    fn withdrawal_fee(&self, _amount: Decimal) -> Decimal {
        match self {
            FeePolicy::Flat(fee) => *fee,
        }
    }
}

/// Tổ hợp chiến lược gửi tiền + phí rút của một tài khoản
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountPolicy {
    pub deposit: DepositPolicy,
    pub withdrawal_fee: FeePolicy,
}

impl AccountPolicy {
    /// Thay phí rút bằng một phí cố định khác
    pub fn with_flat_fee(mut self, fee: Decimal) -> Self {
        self.withdrawal_fee = FeePolicy::Flat(fee);
        self
    }
}

impl DepositCalculator for AccountPolicy {
    fn credited_amount(&self, amount: Decimal) -> Option<Decimal> {
        self.deposit.credited_amount(amount)
    }
}

impl FeeCalculator for AccountPolicy {
    fn withdrawal_fee(&self, amount: Decimal) -> Decimal {
        self.withdrawal_fee.withdrawal_fee(amount)
    }
}

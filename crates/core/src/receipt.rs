//! # Receipt Module
//!
//! Kết quả có cấu trúc của các thao tác trên tài khoản. Tài khoản không tự
//! in ra màn hình; bên gọi hiển thị các giá trị này (xem `feebank-reports`).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Số dư của một tài khoản tại một thời điểm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSnapshot {
    pub account: String,
    pub balance: Decimal,
    pub at: DateTime<Utc>,
}

/// Kết quả một lần gửi tiền
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositReceipt {
    pub account: String,
    /// Số tiền khách gửi
    pub amount: Decimal,
    /// Số tiền thực cộng vào số dư (có thể gồm thưởng)
    pub credited: Decimal,
    pub balance_after: Decimal,
    pub at: DateTime<Utc>,
}

impl DepositReceipt {
    /// Phần thưởng được cộng thêm
    pub fn bonus(&self) -> Decimal {
        self.credited - self.amount
    }
}

/// Kết quả một lần rút tiền
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawalReceipt {
    pub account: String,
    pub amount: Decimal,
    pub fee: Decimal,
    /// amount + fee, số tiền thực bị trừ
    pub total: Decimal,
    pub balance_after: Decimal,
    pub at: DateTime<Utc>,
}

/// Kết quả một lần chuyển khoản: cả hai chân đều đã thực hiện
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferReceipt {
    pub amount: Decimal,
    pub withdrawal: WithdrawalReceipt,
    pub deposit: DepositReceipt,
}

impl TransferReceipt {
    pub fn from_account(&self) -> &str {
        &self.withdrawal.account
    }

    pub fn to_account(&self) -> &str {
        &self.deposit.account
    }
}

//! # Error Module
//!
//! Định nghĩa các domain errors cho Feebank sử dụng thiserror.

use crate::policy::AccountKind;
use rust_decimal::Decimal;
use std::path::PathBuf;
use thiserror::Error;

/// Lỗi nghiệp vụ của một tài khoản.
///
/// Mọi lỗi ở đây được trả về trước khi số dư bị thay đổi.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    #[error("Sorry, account '{account}' has insufficient funds and can not withdraw {requested} (available {available})")]
    InsufficientFunds {
        account: String,
        requested: Decimal,
        available: Decimal,
    },

    #[error("Amount must not be negative: {0}")]
    NegativeAmount(Decimal),

    #[error("Amount {amount} overflows the balance of account '{account}'")]
    AmountOverflow { account: String, amount: Decimal },

    #[error("Account '{account}' ({kind}) has a fixed withdrawal fee")]
    FixedWithdrawalFee { account: String, kind: AccountKind },
}

/// Result type alias với AccountError
pub type AccountResult<T> = Result<T, AccountError>;

impl AccountError {
    /// Tạo lỗi insufficient funds
    pub fn insufficient_funds(account: &str, requested: Decimal, available: Decimal) -> Self {
        Self::InsufficientFunds {
            account: account.to_string(),
            requested,
            available,
        }
    }

    /// Tạo lỗi tràn số
    pub fn overflow(account: &str, amount: Decimal) -> Self {
        Self::AmountOverflow {
            account: account.to_string(),
            amount,
        }
    }

    /// Kiểm tra có phải lỗi insufficient funds không
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, AccountError::InsufficientFunds { .. })
    }
}

/// Lỗi của phiên chạy scenario: liên quan đến tập tài khoản,
/// không phải quy tắc của một tài khoản.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Account already exists: {0}")]
    DuplicateAccount(String),

    #[error("Cannot transfer from account '{0}' to itself")]
    SameAccountTransfer(String),

    #[error("Cannot open account '{name}': {source}")]
    InvalidOpening {
        name: String,
        #[source]
        source: AccountError,
    },

    #[error("Failed to read scenario {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid scenario: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Lỗi khi đọc cấu hình
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

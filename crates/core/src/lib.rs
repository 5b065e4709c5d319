//! # Feebank Core
//!
//! Core domain types cho Feebank: tài khoản, chính sách phí, biên nhận
//! giao dịch, cấu hình và phiên chạy scenario.
//!
//! ## Example
//! ```
//! use feebank_core::Account;
//! use rust_decimal::Decimal;
//!
//! let mut checking = Account::standard("Checking", Decimal::new(100, 0));
//! let receipt = checking.withdraw(Decimal::new(50, 0)).unwrap();
//! assert_eq!(receipt.balance_after, Decimal::new(47, 0));
//! ```

pub mod account;
pub mod config;
pub mod error;
pub mod policy;
pub mod receipt;
pub mod session;

pub use account::Account;
pub use config::BankConfig;
pub use error::{AccountError, AccountResult, ConfigError, SessionError};
pub use policy::{
    AccountKind, AccountPolicy, DepositCalculator, DepositPolicy, FeeCalculator, FeePolicy,
};
pub use receipt::{BalanceSnapshot, DepositReceipt, TransferReceipt, WithdrawalReceipt};
pub use session::{AccountSpec, Bank, Scenario, ScenarioBuilder, Step, StepOutcome};

//! # Session Module
//!
//! [`Bank`] giữ các tài khoản có tên trong bộ nhớ và chạy các bước scenario.
//! Lỗi nghiệp vụ (không đủ số dư, số tiền âm, tràn số) được ghi lại thành
//! outcome và không dừng scenario; lỗi tra cứu tài khoản thì dừng.

use crate::account::Account;
use crate::config::BankConfig;
use crate::error::{AccountError, SessionError};
use crate::policy::AccountKind;
use crate::receipt::{BalanceSnapshot, DepositReceipt, TransferReceipt, WithdrawalReceipt};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Mô tả một tài khoản cần mở
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSpec {
    pub name: String,
    pub kind: AccountKind,
    #[serde(default)]
    pub balance: Decimal,
    /// Phí rút riêng, chỉ hợp lệ cho `fee_savings`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<Decimal>,
}

impl AccountSpec {
    pub fn new(name: &str, kind: AccountKind, balance: Decimal) -> Self {
        Self {
            name: name.to_string(),
            kind,
            balance,
            fee: None,
        }
    }

    pub fn with_fee(mut self, fee: Decimal) -> Self {
        self.fee = Some(fee);
        self
    }
}

/// Một bước trong scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Deposit { account: String, amount: Decimal },
    Withdraw { account: String, amount: Decimal },
    Transfer { from: String, to: String, amount: Decimal },
    Balance { account: String },
}

impl Step {
    pub fn description(&self) -> String {
        match self {
            Step::Deposit { account, amount } => format!("Deposit {} to '{}'", amount, account),
            Step::Withdraw { account, amount } => {
                format!("Withdraw {} from '{}'", amount, account)
            }
            Step::Transfer { from, to, amount } => {
                format!("Transfer {} from '{}' to '{}'", amount, from, to)
            }
            Step::Balance { account } => format!("Balance of '{}'", account),
        }
    }
}

/// Scenario hoàn chỉnh: các tài khoản cần mở, rồi các bước chạy theo thứ tự
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub accounts: Vec<AccountSpec>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Scenario {
    /// Đọc scenario từ file JSON
    pub fn load(path: &Path) -> Result<Self, SessionError> {
        let raw = std::fs::read_to_string(path).map_err(|source| SessionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Builder để dựng scenario trong code
#[derive(Debug, Default)]
pub struct ScenarioBuilder {
    scenario: Scenario,
}

impl ScenarioBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(mut self, spec: AccountSpec) -> Self {
        self.scenario.accounts.push(spec);
        self
    }

    pub fn deposit(mut self, account: &str, amount: Decimal) -> Self {
        self.scenario.steps.push(Step::Deposit {
            account: account.to_string(),
            amount,
        });
        self
    }

    pub fn withdraw(mut self, account: &str, amount: Decimal) -> Self {
        self.scenario.steps.push(Step::Withdraw {
            account: account.to_string(),
            amount,
        });
        self
    }

    pub fn transfer(mut self, from: &str, to: &str, amount: Decimal) -> Self {
        self.scenario.steps.push(Step::Transfer {
            from: from.to_string(),
            to: to.to_string(),
            amount,
        });
        self
    }

    pub fn balance(mut self, account: &str) -> Self {
        self.scenario.steps.push(Step::Balance {
            account: account.to_string(),
        });
        self
    }

    pub fn build(self) -> Scenario {
        self.scenario
    }
}

/// Kết quả của một bước (hoặc của việc mở tài khoản)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum StepOutcome {
    Opened {
        kind: AccountKind,
        snapshot: BalanceSnapshot,
    },
    Balance(BalanceSnapshot),
    Deposited(DepositReceipt),
    Withdrew(WithdrawalReceipt),
    Transferred(TransferReceipt),
    WithdrawRejected {
        account: String,
        amount: Decimal,
        reason: String,
    },
    TransferRejected {
        from: String,
        to: String,
        amount: Decimal,
        reason: String,
    },
    DepositRejected {
        account: String,
        amount: Decimal,
        reason: String,
    },
}

impl StepOutcome {
    pub fn is_rejected(&self) -> bool {
        matches!(
            self,
            StepOutcome::WithdrawRejected { .. }
                | StepOutcome::TransferRejected { .. }
                | StepOutcome::DepositRejected { .. }
        )
    }
}

/// Tập tài khoản có tên trong bộ nhớ
#[derive(Debug, Default)]
pub struct Bank {
    config: BankConfig,
    accounts: HashMap<String, Account>,
    /// Thứ tự mở tài khoản, dùng khi liệt kê
    order: Vec<String>,
}

impl Bank {
    pub fn new(config: BankConfig) -> Self {
        Self {
            config,
            accounts: HashMap::new(),
            order: Vec::new(),
        }
    }

    pub fn config(&self) -> &BankConfig {
        &self.config
    }

    /// Mở tài khoản mới theo AccountSpec
    pub fn open(&mut self, spec: &AccountSpec) -> Result<StepOutcome, SessionError> {
        if self.accounts.contains_key(&spec.name) {
            return Err(SessionError::DuplicateAccount(spec.name.clone()));
        }

        let mut account = Account::new(&spec.name, spec.balance, spec.kind, &self.config);
        if let Some(fee) = spec.fee {
            account = account
                .with_withdrawal_fee(fee)
                .map_err(|source| SessionError::InvalidOpening {
                    name: spec.name.clone(),
                    source,
                })?;
        }

        let outcome = StepOutcome::Opened {
            kind: account.kind(),
            snapshot: account.snapshot(),
        };
        self.order.push(spec.name.clone());
        self.accounts.insert(spec.name.clone(), account);
        Ok(outcome)
    }

    pub fn get(&self, name: &str) -> Result<&Account, SessionError> {
        self.accounts
            .get(name)
            .ok_or_else(|| SessionError::AccountNotFound(name.to_string()))
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut Account, SessionError> {
        self.accounts
            .get_mut(name)
            .ok_or_else(|| SessionError::AccountNotFound(name.to_string()))
    }

    /// Các tài khoản theo thứ tự mở
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.order.iter().filter_map(|name| self.accounts.get(name))
    }

    /// Thực thi một bước
    pub fn execute(&mut self, step: &Step) -> Result<StepOutcome, SessionError> {
        let outcome = match step {
            Step::Deposit { account, amount } => match self.get_mut(account)?.deposit(*amount) {
                Ok(receipt) => StepOutcome::Deposited(receipt),
                Err(err) => StepOutcome::DepositRejected {
                    account: account.clone(),
                    amount: *amount,
                    reason: err.to_string(),
                },
            },
            Step::Withdraw { account, amount } => match self.get_mut(account)?.withdraw(*amount) {
                Ok(receipt) => StepOutcome::Withdrew(receipt),
                Err(err) => StepOutcome::WithdrawRejected {
                    account: account.clone(),
                    amount: *amount,
                    reason: err.to_string(),
                },
            },
            Step::Transfer { from, to, amount } => {
                match self.transfer(from, to, *amount)? {
                    Ok(receipt) => StepOutcome::Transferred(receipt),
                    Err(err) => StepOutcome::TransferRejected {
                        from: from.clone(),
                        to: to.clone(),
                        amount: *amount,
                        reason: err.to_string(),
                    },
                }
            }
            Step::Balance { account } => StepOutcome::Balance(self.get(account)?.snapshot()),
        };

        if outcome.is_rejected() {
            info!(step = %step.description(), "step rejected");
        }
        Ok(outcome)
    }

    /// Chuyển khoản giữa hai tài khoản có tên.
    ///
    /// Lỗi ngoài là lỗi tra cứu tài khoản; lỗi trong là tài khoản nguồn
    /// hoặc đích từ chối giao dịch.
    pub fn transfer(
        &mut self,
        from: &str,
        to: &str,
        amount: Decimal,
    ) -> Result<Result<TransferReceipt, AccountError>, SessionError> {
        if from == to {
            return Err(SessionError::SameAccountTransfer(from.to_string()));
        }
        if !self.accounts.contains_key(to) {
            return Err(SessionError::AccountNotFound(to.to_string()));
        }

        let mut source = self
            .accounts
            .remove(from)
            .ok_or_else(|| SessionError::AccountNotFound(from.to_string()))?;
        let result = match self.accounts.get_mut(to) {
            Some(target) => Ok(source.transfer(amount, target)),
            None => Err(SessionError::AccountNotFound(to.to_string())),
        };
        self.accounts.insert(from.to_string(), source);
        result
    }

    /// Mở tất cả tài khoản rồi chạy lần lượt các bước
    pub fn run(&mut self, scenario: &Scenario) -> Result<Vec<StepOutcome>, SessionError> {
        let mut outcomes = Vec::with_capacity(scenario.accounts.len() + scenario.steps.len());

        for spec in &scenario.accounts {
            outcomes.push(self.open(spec)?);
        }
        for step in &scenario.steps {
            outcomes.push(self.execute(step)?);
        }

        info!(
            steps = scenario.steps.len(),
            rejected = outcomes.iter().filter(|o| o.is_rejected()).count(),
            "scenario finished"
        );
        Ok(outcomes)
    }
}

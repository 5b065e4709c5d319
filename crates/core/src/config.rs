//! # Config Module
//!
//! Cấu hình phí và hệ số thưởng. Giá trị mặc định khớp với các quy tắc
//! gốc: phí rút 3 cho tài khoản thường và tài khoản thưởng, phí 5 cho
//! tài khoản tiết kiệm, hệ số thưởng 1.05.

use crate::error::ConfigError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Cấu hình phí chung cho cả ngân hàng.
///
/// Trường nào thiếu trong file cấu hình sẽ lấy giá trị từ [`BankConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankConfig {
    /// Phí cố định mỗi lần rút của tài khoản thường
    pub standard_withdrawal_fee: Decimal,
    /// Phí cố định mỗi lần rút của tài khoản thưởng
    pub bonus_withdrawal_fee: Decimal,
    /// Phí mặc định của tài khoản tiết kiệm (có thể đặt riêng từng tài khoản)
    pub savings_withdrawal_fee: Decimal,
    /// Hệ số thưởng khi gửi tiền cho tài khoản thưởng và tiết kiệm
    pub bonus_multiplier: Decimal,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            standard_withdrawal_fee: Decimal::new(3, 0),
            bonus_withdrawal_fee: Decimal::new(3, 0),
            savings_withdrawal_fee: Decimal::new(5, 0),
            bonus_multiplier: Decimal::new(105, 2),
        }
    }
}

impl BankConfig {
    /// Đọc cấu hình từ file JSON
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Parse và validate cấu hình từ chuỗi JSON
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: BankConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Kiểm tra các giá trị hợp lệ
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fees = [
            ("standard_withdrawal_fee", self.standard_withdrawal_fee),
            ("bonus_withdrawal_fee", self.bonus_withdrawal_fee),
            ("savings_withdrawal_fee", self.savings_withdrawal_fee),
        ];
        for (field, fee) in fees {
            if fee < Decimal::ZERO {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("fee must not be negative, got {}", fee),
                });
            }
        }

        if self.bonus_multiplier < Decimal::ONE {
            return Err(ConfigError::InvalidValue {
                field: "bonus_multiplier",
                reason: format!("multiplier must be at least 1, got {}", self.bonus_multiplier),
            });
        }

        Ok(())
    }
}

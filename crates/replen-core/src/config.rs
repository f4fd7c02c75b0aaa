//! 補貨引擎配置

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ReplenError, Result};

/// 預設超量庫存天數（Days of Supply）
pub const DEFAULT_EXCESS_DOS_THRESHOLD: u32 = 60;

/// 預設銷售統計窗口（天）
pub const DEFAULT_SALES_WINDOW_DAYS: u32 = 30;

/// 預設中央倉代碼
pub const DEFAULT_SOURCE_WAREHOUSE: &str = "WH01";

/// 補貨計算配置
///
/// 同一次計算只有一個配置來源；超量天數同時用於計算與報表欄位名稱。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplenishmentConfig {
    /// 超量庫存天數門檻（目標庫存 = 日均銷售 × 天數）
    pub excess_dos_threshold: Decimal,

    /// 銷售統計窗口（Sales_30D 涵蓋的天數）
    pub sales_window_days: u32,

    /// 調撥來源倉庫代碼
    pub source_warehouse_id: String,
}

impl ReplenishmentConfig {
    /// 創建新的補貨配置
    pub fn new(excess_dos_threshold: Decimal) -> Self {
        Self {
            excess_dos_threshold,
            ..Self::default()
        }
    }

    /// 從 JSON 文件讀取配置（缺少的欄位使用預設值）
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ReplenError::ConfigInvalid(e.to_string()))
    }

    /// 建構器模式：設置超量天數門檻
    pub fn with_excess_dos_threshold(mut self, days: Decimal) -> Self {
        self.excess_dos_threshold = days;
        self
    }

    /// 建構器模式：設置銷售統計窗口
    pub fn with_sales_window_days(mut self, days: u32) -> Self {
        self.sales_window_days = days;
        self
    }

    /// 建構器模式：設置調撥來源倉庫
    pub fn with_source_warehouse_id(mut self, warehouse_id: String) -> Self {
        self.source_warehouse_id = warehouse_id;
        self
    }

    /// 檢查配置是否有效
    pub fn validate(&self) -> Result<()> {
        if self.excess_dos_threshold < Decimal::ZERO {
            return Err(ReplenError::ConfigInvalid(format!(
                "超量天數門檻不可為負數: {}",
                self.excess_dos_threshold
            )));
        }
        if self.sales_window_days == 0 {
            return Err(ReplenError::ConfigInvalid(
                "銷售統計窗口必須大於 0".to_string(),
            ));
        }
        if self.source_warehouse_id.trim().is_empty() {
            return Err(ReplenError::ConfigInvalid("調撥來源倉庫代碼為空".to_string()));
        }
        Ok(())
    }

    /// 超量門檻的顯示文字（整數天數不帶小數點）
    pub fn threshold_label(&self) -> String {
        self.excess_dos_threshold.normalize().to_string()
    }

    /// 報表欄位：目標庫存（例如 "70D Target(daily*70)"）
    pub fn target_column_label(&self) -> String {
        let days = self.threshold_label();
        format!("{days}D Target(daily*{days})")
    }

    /// 報表欄位：超量數量（例如 "Excess(branch stock - 70D target)"）
    pub fn excess_column_label(&self) -> String {
        format!("Excess(branch stock - {}D target)", self.threshold_label())
    }
}

impl Default for ReplenishmentConfig {
    fn default() -> Self {
        Self {
            excess_dos_threshold: Decimal::from(DEFAULT_EXCESS_DOS_THRESHOLD),
            sales_window_days: DEFAULT_SALES_WINDOW_DAYS,
            source_warehouse_id: DEFAULT_SOURCE_WAREHOUSE.to_string(),
        }
    }
}

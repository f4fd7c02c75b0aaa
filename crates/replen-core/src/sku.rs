//! 物料主檔模型

use serde::{Deserialize, Serialize};

/// 物料主檔記錄（單次計算內不可變）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkuRecord {
    /// 物料ID
    pub sku: String,

    /// 品名
    pub product_name: String,

    /// 品類
    pub category: String,

    /// 供應商
    pub vendor: String,

    /// 採購提前期（天）
    pub lead_time_days: u32,
}

impl SkuRecord {
    /// 創建新的物料主檔記錄
    pub fn new(sku: String, product_name: String, vendor: String) -> Self {
        Self {
            sku,
            product_name,
            category: String::new(),
            vendor,
            lead_time_days: 0,
        }
    }

    /// 建構器模式：設置品類
    pub fn with_category(mut self, category: String) -> Self {
        self.category = category;
        self
    }

    /// 建構器模式：設置提前期
    pub fn with_lead_time_days(mut self, days: u32) -> Self {
        self.lead_time_days = days;
        self
    }

    /// 檢查記錄是否有效
    pub fn validate(&self) -> Result<(), String> {
        if self.sku.trim().is_empty() {
            return Err("SKU 為空".to_string());
        }
        Ok(())
    }
}

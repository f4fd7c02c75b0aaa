//! # Replenishment Core
//!
//! 補貨引擎的核心資料模型與類型定義（中央倉 + 多分店）

pub mod config;
pub mod excess;
pub mod inventory;
pub mod merged;
pub mod plan;
pub mod sku;

// Re-export 主要類型
pub use config::ReplenishmentConfig;
pub use excess::ExcessFinding;
pub use inventory::{BranchInventory, WarehouseStock};
pub use merged::{AnnotatedRow, MergedRow};
pub use plan::{LpoTrigger, PurchaseNeed, ShortfallReason, TransferOrder};
pub use sku::SkuRecord;

use std::fmt;

/// 輸入資料表
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEntity {
    /// 分店庫存
    BranchInventory,
    /// 中央倉庫存
    WarehouseStock,
    /// 物料主檔
    SkuMaster,
}

impl InputEntity {
    /// 資料表名稱（與外部檔案名稱一致）
    pub fn as_str(&self) -> &'static str {
        match self {
            InputEntity::BranchInventory => "Branch_Inventory",
            InputEntity::WarehouseStock => "Warehouse_Stock",
            InputEntity::SkuMaster => "SKU_Master",
        }
    }
}

impl fmt::Display for InputEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 補貨引擎錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum ReplenError {
    #[error("缺少輸入資料表: {0}")]
    MissingInput(InputEntity),

    #[error("無效的資料列: {entity} 第 {index} 列: {reason}")]
    InvalidRecord {
        entity: InputEntity,
        index: usize,
        reason: String,
    },

    #[error("無效的配置: {0}")]
    ConfigInvalid(String),

    #[error("計算錯誤: {0}")]
    CalculationError(String),
}

pub type Result<T> = std::result::Result<T, ReplenError>;

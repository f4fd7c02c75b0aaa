//! 庫存模型（分店庫存、中央倉庫存）

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 分店庫存狀態（每個 SKU × 分店一筆）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchInventory {
    /// 物料ID
    pub sku: String,

    /// 分店ID
    pub branch: String,

    /// 分店現有庫存
    pub branch_stock: Decimal,

    /// 最低庫存（低於此值觸發補貨）
    pub min_stock: Decimal,

    /// 最高庫存（補貨補足到此值）
    pub max_stock: Decimal,

    /// 近 30 天銷量
    pub sales_30d: Decimal,
}

impl BranchInventory {
    /// 創建新的分店庫存記錄
    pub fn new(
        sku: String,
        branch: String,
        branch_stock: Decimal,
        min_stock: Decimal,
        max_stock: Decimal,
    ) -> Self {
        Self {
            sku,
            branch,
            branch_stock,
            min_stock,
            max_stock,
            sales_30d: Decimal::ZERO,
        }
    }

    /// 建構器模式：設置近 30 天銷量
    pub fn with_sales_30d(mut self, sales: Decimal) -> Self {
        self.sales_30d = sales;
        self
    }

    /// 檢查記錄是否有效
    ///
    /// 只檢查主鍵欄位；負數或 最低 > 最高 的數量照常計算。
    pub fn validate(&self) -> Result<(), String> {
        if self.sku.trim().is_empty() {
            return Err("SKU 為空".to_string());
        }
        if self.branch.trim().is_empty() {
            return Err(format!("SKU {} 缺少分店代碼", self.sku));
        }
        Ok(())
    }
}

/// 中央倉庫存（每個 SKU 一筆，單一倉庫）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarehouseStock {
    /// 物料ID
    pub sku: String,

    /// 可用庫存
    pub warehouse_stock: Decimal,
}

impl WarehouseStock {
    /// 創建新的中央倉庫存記錄
    pub fn new(sku: String, warehouse_stock: Decimal) -> Self {
        Self {
            sku,
            warehouse_stock,
        }
    }

    /// 檢查記錄是否有效
    pub fn validate(&self) -> Result<(), String> {
        if self.sku.trim().is_empty() {
            return Err("SKU 為空".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_branch_inventory() {
        let inventory = BranchInventory::new(
            "SKU0001".to_string(),
            "BR001".to_string(),
            Decimal::from(5),
            Decimal::from(10),
            Decimal::from(50),
        )
        .with_sales_30d(Decimal::from(30));

        assert_eq!(inventory.sales_30d, Decimal::from(30));
        assert!(inventory.validate().is_ok());
    }

    #[test]
    fn test_branch_inventory_validation() {
        let blank_branch = BranchInventory::new(
            "SKU0001".to_string(),
            "".to_string(),
            Decimal::from(5),
            Decimal::from(10),
            Decimal::from(50),
        );
        assert!(blank_branch.validate().is_err());

        // 數量異常不影響有效性
        let negative = BranchInventory::new(
            "SKU0001".to_string(),
            "BR001".to_string(),
            Decimal::from(-1),
            Decimal::from(10),
            Decimal::from(50),
        );
        assert!(negative.validate().is_ok());

        let inverted = BranchInventory::new(
            "SKU0001".to_string(),
            "BR001".to_string(),
            Decimal::from(5),
            Decimal::from(60),
            Decimal::from(50),
        );
        assert!(inverted.validate().is_ok());
    }

    #[test]
    fn test_warehouse_stock_validation() {
        assert!(WarehouseStock::new("SKU0001".to_string(), Decimal::ZERO)
            .validate()
            .is_ok());
        assert!(WarehouseStock::new("SKU0001".to_string(), Decimal::from(-3))
            .validate()
            .is_ok());
        assert!(WarehouseStock::new(" ".to_string(), Decimal::from(3))
            .validate()
            .is_err());
    }
}

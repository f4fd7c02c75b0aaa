//! 補貨計劃模型（調撥單、採購需求）

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 調撥單（中央倉 → 分店）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferOrder {
    /// 物料ID
    pub sku: String,

    /// 來源倉庫
    pub from_warehouse: String,

    /// 目的分店
    pub to_branch: String,

    /// 決策當下的分店最低庫存
    pub min_stock: Decimal,

    /// 決策當下的分店最高庫存
    pub max_stock: Decimal,

    /// 決策當下的分店庫存
    pub branch_stock: Decimal,

    /// 調撥數量
    pub transfer_qty: Decimal,

    /// 本次調撥前的中央倉剩餘庫存
    pub warehouse_stock: Decimal,
}

/// 缺口原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShortfallReason {
    /// 中央倉只能部分滿足
    PartialAllocation,
    /// 中央倉已無庫存
    WarehouseOutOfStock,
}

impl ShortfallReason {
    /// 由調撥數量判定缺口原因
    pub fn from_transfer_qty(transfer_qty: Decimal) -> Self {
        if transfer_qty > Decimal::ZERO {
            ShortfallReason::PartialAllocation
        } else {
            ShortfallReason::WarehouseOutOfStock
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShortfallReason::PartialAllocation => "Partial Allocation",
            ShortfallReason::WarehouseOutOfStock => "Warehouse Out of Stock",
        }
    }
}

impl fmt::Display for ShortfallReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 觸發採購（LPO）的分店缺口明細
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LpoTrigger {
    pub sku: String,
    pub branch: String,
    pub vendor: String,

    /// 分店補貨需求
    pub reorder_qty: Decimal,

    /// 中央倉實際調撥數量
    pub transfer_qty: Decimal,

    /// 調撥前中央倉庫存
    pub warehouse_stock_before: Decimal,

    /// 調撥後中央倉庫存
    pub warehouse_stock_after: Decimal,

    /// 缺口數量（需向供應商採購）
    pub shortfall: Decimal,

    pub reason: ShortfallReason,
}

/// 採購需求（按 SKU × 供應商彙總）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseNeed {
    /// 物料ID
    pub sku: String,

    /// 供應商
    pub vendor: String,

    /// 需採購數量
    pub required_qty: Decimal,
}

impl PurchaseNeed {
    /// 創建新的採購需求
    pub fn new(sku: String, vendor: String, required_qty: Decimal) -> Self {
        Self {
            sku,
            vendor,
            required_qty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(30, ShortfallReason::PartialAllocation, "Partial Allocation")]
    #[case(0, ShortfallReason::WarehouseOutOfStock, "Warehouse Out of Stock")]
    fn test_shortfall_reason(
        #[case] transfer_qty: i64,
        #[case] expected: ShortfallReason,
        #[case] label: &str,
    ) {
        let reason = ShortfallReason::from_transfer_qty(Decimal::from(transfer_qty));
        assert_eq!(reason, expected);
        assert_eq!(reason.to_string(), label);
    }
}

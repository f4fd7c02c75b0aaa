//! 合併視圖模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{BranchInventory, SkuRecord};

/// 合併後的分店 × SKU 資料列（分店庫存 ⋈ 物料主檔 ⋈ 中央倉庫存）
///
/// 每次計算重新產生，下游階段只讀。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedRow {
    pub sku: String,
    pub branch: String,
    pub branch_stock: Decimal,
    pub min_stock: Decimal,
    pub max_stock: Decimal,
    pub sales_30d: Decimal,
    pub product_name: String,
    pub category: String,
    pub vendor: String,
    pub lead_time_days: u32,
    pub warehouse_stock: Decimal,
}

impl MergedRow {
    /// 由三個來源組合一筆合併列
    pub fn join(inventory: &BranchInventory, sku: &SkuRecord, warehouse_stock: Decimal) -> Self {
        Self {
            sku: inventory.sku.clone(),
            branch: inventory.branch.clone(),
            branch_stock: inventory.branch_stock,
            min_stock: inventory.min_stock,
            max_stock: inventory.max_stock,
            sales_30d: inventory.sales_30d,
            product_name: sku.product_name.clone(),
            category: sku.category.clone(),
            vendor: sku.vendor.clone(),
            lead_time_days: sku.lead_time_days,
            warehouse_stock,
        }
    }
}

/// 帶有計算欄位的合併列（未四捨五入）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedRow {
    #[serde(flatten)]
    pub row: MergedRow,

    /// 分店補貨需求（Total_Branch_Requirement）
    pub total_branch_requirement: Decimal,

    /// 日均銷售
    pub avg_daily_sales: Decimal,

    /// 超量判定的目標庫存
    pub target_excess_stock: Decimal,

    /// 超量數量
    pub excess_qty: Decimal,
}

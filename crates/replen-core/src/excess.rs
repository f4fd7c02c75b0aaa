//! 超量庫存模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 超量庫存發現（只記錄超量數量 > 0 的分店 × SKU）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExcessFinding {
    pub branch: String,
    pub sku: String,
    pub product_name: String,
    pub branch_stock: Decimal,
    pub min_stock: Decimal,
    pub max_stock: Decimal,

    /// 分店補貨需求
    pub total_branch_requirement: Decimal,

    pub sales_30d: Decimal,

    /// 日均銷售
    pub avg_daily_sales: Decimal,

    /// 目標庫存（日均銷售 × 超量天數）
    pub target_excess_stock: Decimal,

    /// 超量數量
    pub excess_qty: Decimal,
}

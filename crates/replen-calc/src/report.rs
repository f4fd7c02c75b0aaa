//! 報表投影：將計算結果整理成固定欄位名稱的表格
//!
//! 表格只是記憶體中的字串矩陣，寫入檔案或寄送由外部負責。

use replen_core::{
    AnnotatedRow, ExcessFinding, LpoTrigger, PurchaseNeed, ReplenishmentConfig, TransferOrder,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::excess::OUTPUT_DECIMAL_PLACES;

/// 表格（表頭 + 資料列）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    fn with_headers(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 依欄位名稱取得欄位索引
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    /// 取得指定列、指定欄位的值
    pub fn cell(&self, row: usize, header: &str) -> Option<&str> {
        let col = self.column_index(header)?;
        self.rows.get(row)?.get(col).map(String::as_str)
    }
}

fn round(value: Decimal) -> String {
    value.round_dp(OUTPUT_DECIMAL_PLACES).to_string()
}

/// 調撥單表
pub fn transfer_orders_table(orders: &[TransferOrder]) -> Table {
    let mut table = Table::with_headers(&[
        "SKU",
        "From_Warehouse",
        "To_Branch",
        "Min_Stock",
        "Max_Stock",
        "Branch_Stock",
        "Transfer_Qty",
        "Warehouse_Stock",
    ]);
    for order in orders {
        table.rows.push(vec![
            order.sku.clone(),
            order.from_warehouse.clone(),
            order.to_branch.clone(),
            order.min_stock.to_string(),
            order.max_stock.to_string(),
            order.branch_stock.to_string(),
            order.transfer_qty.to_string(),
            order.warehouse_stock.to_string(),
        ]);
    }
    table
}

/// 採購需求表（LPO）
pub fn purchase_needs_table(needs: &[PurchaseNeed]) -> Table {
    let mut table = Table::with_headers(&["SKU", "Vendor", "Required_Qty"]);
    for need in needs {
        table.rows.push(vec![
            need.sku.clone(),
            need.vendor.clone(),
            need.required_qty.to_string(),
        ]);
    }
    table
}

/// 觸發採購的調撥明細表
pub fn lpo_triggers_table(triggers: &[LpoTrigger]) -> Table {
    let mut table = Table::with_headers(&[
        "SKU",
        "Branch",
        "ReorderQty",
        "Transfer_Qty_from_WH",
        "Warehouse_Stock_After_Transfer",
        "LPO_Shortfall",
        "Reason",
    ]);
    for trigger in triggers {
        table.rows.push(vec![
            trigger.sku.clone(),
            trigger.branch.clone(),
            trigger.reorder_qty.to_string(),
            trigger.transfer_qty.to_string(),
            trigger.warehouse_stock_after.to_string(),
            trigger.shortfall.to_string(),
            trigger.reason.to_string(),
        ]);
    }
    table
}

/// 超量庫存表
///
/// 最後兩欄是目標庫存與超量數量的顯示用副本，欄名帶有超量天數。
pub fn excess_stock_table(findings: &[ExcessFinding], config: &ReplenishmentConfig) -> Table {
    let target_label = config.target_column_label();
    let excess_label = config.excess_column_label();
    let mut table = Table::with_headers(&[
        "Branch",
        "SKU",
        "Product_Name",
        "Branch_Stock",
        "Min_Stock",
        "Max_Stock",
        "Total_Branch_Requirement",
        "Sales_30D",
        "Avg_Daily_Sales",
        "Target_Excess_Stock",
        "ExcessQty",
        target_label.as_str(),
        excess_label.as_str(),
    ]);
    for finding in findings {
        table.rows.push(vec![
            finding.branch.clone(),
            finding.sku.clone(),
            finding.product_name.clone(),
            finding.branch_stock.to_string(),
            finding.min_stock.to_string(),
            finding.max_stock.to_string(),
            finding.total_branch_requirement.to_string(),
            finding.sales_30d.to_string(),
            round(finding.avg_daily_sales),
            round(finding.target_excess_stock),
            round(finding.excess_qty),
            round(finding.target_excess_stock),
            round(finding.excess_qty),
        ]);
    }
    table
}

/// 合併視圖表（含所有計算欄位）
pub fn annotated_table(rows: &[AnnotatedRow]) -> Table {
    let mut table = Table::with_headers(&[
        "SKU",
        "Branch",
        "Branch_Stock",
        "Min_Stock",
        "Max_Stock",
        "Sales_30D",
        "Product_Name",
        "Category",
        "Vendor",
        "Lead_Time_Days",
        "Warehouse_Stock",
        "Total_Branch_Requirement",
        "Avg_Daily_Sales",
        "Target_Excess_Stock",
        "ExcessQty",
    ]);
    for a in rows {
        table.rows.push(vec![
            a.row.sku.clone(),
            a.row.branch.clone(),
            a.row.branch_stock.to_string(),
            a.row.min_stock.to_string(),
            a.row.max_stock.to_string(),
            a.row.sales_30d.to_string(),
            a.row.product_name.clone(),
            a.row.category.clone(),
            a.row.vendor.clone(),
            a.row.lead_time_days.to_string(),
            a.row.warehouse_stock.to_string(),
            a.total_branch_requirement.to_string(),
            a.avg_daily_sales.to_string(),
            a.target_excess_stock.to_string(),
            a.excess_qty.to_string(),
        ]);
    }
    table
}

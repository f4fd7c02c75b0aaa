//! 超量庫存判定（Days of Supply）

use replen_core::{AnnotatedRow, ExcessFinding, MergedRow, ReplenError, ReplenishmentConfig};
use rust_decimal::Decimal;

use crate::reorder::reorder_qty_for;

/// 報表數值的小數位數
pub const OUTPUT_DECIMAL_PLACES: u32 = 2;

/// 單列的超量計算值
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExcessMetrics {
    pub avg_daily_sales: Decimal,
    pub target_excess_stock: Decimal,
    pub excess_qty: Decimal,
}

fn overflow(what: &str, lhs: Decimal, rhs: Decimal) -> ReplenError {
    ReplenError::CalculationError(format!("{}溢位: {} 與 {}", what, lhs, rhs))
}

/// 計算日均銷售、目標庫存與超量數量
///
/// 銷售為 0 或負數時目標庫存為 0，任何正庫存都視為超量（呆滯庫存）。
pub fn excess_metrics(
    branch_stock: Decimal,
    sales_30d: Decimal,
    config: &ReplenishmentConfig,
) -> replen_core::Result<ExcessMetrics> {
    let window = Decimal::from(config.sales_window_days);
    let avg_daily_sales = sales_30d
        .checked_div(window)
        .ok_or_else(|| overflow("日均銷售", sales_30d, window))?;

    // 先乘後除，減少 1/30 的截斷誤差
    let target_excess_stock = if avg_daily_sales > Decimal::ZERO {
        sales_30d
            .checked_mul(config.excess_dos_threshold)
            .and_then(|total| total.checked_div(window))
            .ok_or_else(|| overflow("目標庫存", sales_30d, config.excess_dos_threshold))?
    } else {
        Decimal::ZERO
    };

    let excess_qty = branch_stock
        .checked_sub(target_excess_stock)
        .ok_or_else(|| overflow("超量數量", branch_stock, target_excess_stock))?
        .max(Decimal::ZERO);

    Ok(ExcessMetrics {
        avg_daily_sales,
        target_excess_stock,
        excess_qty,
    })
}

/// 為合併視圖加上補貨需求與超量計算欄位
pub fn annotate(
    rows: &[MergedRow],
    config: &ReplenishmentConfig,
) -> replen_core::Result<Vec<AnnotatedRow>> {
    rows.iter()
        .map(|row| {
            let metrics = excess_metrics(row.branch_stock, row.sales_30d, config)?;
            Ok(AnnotatedRow {
                row: row.clone(),
                total_branch_requirement: reorder_qty_for(row)?,
                avg_daily_sales: metrics.avg_daily_sales,
                target_excess_stock: metrics.target_excess_stock,
                excess_qty: metrics.excess_qty,
            })
        })
        .collect()
}

/// 篩選超量數量 > 0 的列，數值欄位四捨五入到兩位小數
pub fn detect_excess(annotated: &[AnnotatedRow]) -> Vec<ExcessFinding> {
    annotated
        .iter()
        .filter(|a| a.excess_qty > Decimal::ZERO)
        .map(|a| ExcessFinding {
            branch: a.row.branch.clone(),
            sku: a.row.sku.clone(),
            product_name: a.row.product_name.clone(),
            branch_stock: a.row.branch_stock,
            min_stock: a.row.min_stock,
            max_stock: a.row.max_stock,
            total_branch_requirement: a.total_branch_requirement,
            sales_30d: a.row.sales_30d,
            avg_daily_sales: a.avg_daily_sales.round_dp(OUTPUT_DECIMAL_PLACES),
            target_excess_stock: a.target_excess_stock.round_dp(OUTPUT_DECIMAL_PLACES),
            excess_qty: a.excess_qty.round_dp(OUTPUT_DECIMAL_PLACES),
        })
        .collect()
}

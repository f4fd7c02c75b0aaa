//! 中央倉庫存分配與採購缺口計算
//!
//! 單一中央倉的庫存池按 SKU 升序、同 SKU 依合併視圖順序（穩定排序）
//! 逐筆分配給有補貨需求的分店，先到先得；分配不足的部分轉為採購需求。

use replen_core::{
    LpoTrigger, MergedRow, PurchaseNeed, ReplenError, ShortfallReason, TransferOrder,
    WarehouseStock,
};
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};

use crate::reorder::reorder_qty_for;

/// 中央倉可分配庫存池
///
/// 由輸入的中央倉庫存複製而來，只在一次分配中使用；數量只減不增。
/// 輸入為負數的 SKU 視為無可分配庫存，不會被扣減。
#[derive(Debug, Clone, Default)]
pub struct WarehousePool {
    remaining: HashMap<String, Decimal>,
}

impl WarehousePool {
    /// 由中央倉庫存建立庫存池（重複的 SKU 以第一筆為準）
    pub fn from_stock(stock: &[WarehouseStock]) -> Self {
        let mut remaining = HashMap::with_capacity(stock.len());
        for record in stock {
            remaining
                .entry(record.sku.clone())
                .or_insert(record.warehouse_stock);
        }
        Self { remaining }
    }

    /// 目前可用數量（不在庫存池中的 SKU 視為 0）
    pub fn available(&self, sku: &str) -> Decimal {
        self.remaining.get(sku).copied().unwrap_or(Decimal::ZERO)
    }

    /// 從庫存池取貨，返回實際取得的數量
    pub fn draw(&mut self, sku: &str, requested: Decimal) -> replen_core::Result<Decimal> {
        let available = self.available(sku);
        let taken = requested.min(available).max(Decimal::ZERO);

        if taken > Decimal::ZERO {
            let slot = self.remaining.get_mut(sku).ok_or_else(|| {
                ReplenError::CalculationError(format!("庫存池中找不到 SKU {}", sku))
            })?;
            *slot = slot.checked_sub(taken).ok_or_else(|| {
                ReplenError::CalculationError(format!("SKU {} 中央倉扣減溢位", sku))
            })?;
            if *slot < Decimal::ZERO {
                return Err(ReplenError::CalculationError(format!(
                    "SKU {} 中央倉庫存為負: {}",
                    sku, slot
                )));
            }
        }

        Ok(taken)
    }

    /// 剩餘庫存快照（按 SKU 排序）
    pub fn snapshot(&self) -> BTreeMap<String, Decimal> {
        self.remaining
            .iter()
            .map(|(sku, qty)| (sku.clone(), *qty))
            .collect()
    }
}

/// 分配結果
#[derive(Debug, Clone, Default)]
pub struct AllocationOutcome {
    /// 調撥單（依處理順序）
    pub transfer_orders: Vec<TransferOrder>,

    /// 每筆有缺口的分店明細（依處理順序）
    pub lpo_triggers: Vec<LpoTrigger>,

    /// 按 SKU × 供應商彙總的採購需求
    pub purchase_needs: Vec<PurchaseNeed>,

    /// 分配後的中央倉剩餘庫存
    pub remaining_pool: BTreeMap<String, Decimal>,
}

/// 執行中央倉分配
pub fn allocate(
    rows: &[MergedRow],
    warehouse_stock: &[WarehouseStock],
    source_warehouse_id: &str,
) -> replen_core::Result<AllocationOutcome> {
    // Step 1-2: 篩選有補貨需求的列，按 SKU 穩定排序
    let mut selection: Vec<(&MergedRow, Decimal)> = Vec::new();
    for row in rows {
        let qty = reorder_qty_for(row)?;
        if qty > Decimal::ZERO {
            selection.push((row, qty));
        }
    }
    selection.sort_by(|a, b| a.0.sku.cmp(&b.0.sku));

    tracing::debug!("需補貨的分店 × SKU: {} 筆", selection.len());

    // Step 3: 複製中央倉庫存為庫存池
    let mut pool = WarehousePool::from_stock(warehouse_stock);

    let mut outcome = AllocationOutcome::default();

    // Step 4: 單次由左至右分配
    for (row, reorder_qty) in selection {
        let before = pool.available(&row.sku);
        let transfer_qty = pool.draw(&row.sku, reorder_qty)?;
        let after = pool.available(&row.sku);

        if transfer_qty > Decimal::ZERO {
            outcome.transfer_orders.push(TransferOrder {
                sku: row.sku.clone(),
                from_warehouse: source_warehouse_id.to_string(),
                to_branch: row.branch.clone(),
                min_stock: row.min_stock,
                max_stock: row.max_stock,
                branch_stock: row.branch_stock,
                transfer_qty,
                warehouse_stock: before,
            });
        }

        let shortfall = reorder_qty.checked_sub(transfer_qty).ok_or_else(|| {
            ReplenError::CalculationError(format!("SKU {} @ {} 缺口計算溢位", row.sku, row.branch))
        })?;
        if shortfall > Decimal::ZERO {
            let reason = ShortfallReason::from_transfer_qty(transfer_qty);
            tracing::debug!(
                "缺口: {} @ {} 需求 {}, 調撥 {}, 缺 {} ({})",
                row.sku,
                row.branch,
                reorder_qty,
                transfer_qty,
                shortfall,
                reason
            );
            outcome.lpo_triggers.push(LpoTrigger {
                sku: row.sku.clone(),
                branch: row.branch.clone(),
                vendor: row.vendor.clone(),
                reorder_qty,
                transfer_qty,
                warehouse_stock_before: before,
                warehouse_stock_after: after,
                shortfall,
                reason,
            });
        }
    }

    // Step 5: 按 SKU × 供應商彙總
    outcome.purchase_needs = aggregate_purchase_needs(outcome.lpo_triggers.iter().map(|t| {
        PurchaseNeed::new(t.sku.clone(), t.vendor.clone(), t.shortfall)
    }))?;
    outcome.remaining_pool = pool.snapshot();

    Ok(outcome)
}

/// 按 (SKU, 供應商) 彙總採購需求，結果按 SKU、供應商排序
///
/// 對已彙總的結果再次彙總會得到相同結果。
pub fn aggregate_purchase_needs<I>(needs: I) -> replen_core::Result<Vec<PurchaseNeed>>
where
    I: IntoIterator<Item = PurchaseNeed>,
{
    let mut grouped: BTreeMap<(String, String), Decimal> = BTreeMap::new();
    for need in needs {
        let qty = need.required_qty;
        let total = grouped
            .entry((need.sku, need.vendor))
            .or_insert(Decimal::ZERO);
        let sum = total.checked_add(qty).ok_or_else(|| {
            ReplenError::CalculationError(format!("採購需求彙總溢位: {} + {}", total, qty))
        })?;
        *total = sum;
    }

    Ok(grouped
        .into_iter()
        .map(|((sku, vendor), required_qty)| PurchaseNeed::new(sku, vendor, required_qty))
        .collect())
}

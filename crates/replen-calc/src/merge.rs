//! 合併階段：分店庫存 ⋈ 物料主檔 ⋈ 中央倉庫存

use replen_core::{BranchInventory, MergedRow, SkuRecord, WarehouseStock};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// 合併統計（內連接丟棄的列數）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeReport {
    /// 輸入的分店庫存列數
    pub input_rows: usize,

    /// 合併後保留的列數
    pub merged_rows: usize,

    /// 物料主檔中找不到 SKU 而丟棄的列數
    pub dropped_missing_sku: usize,

    /// 中央倉庫存中找不到 SKU 而丟棄的列數
    pub dropped_missing_warehouse: usize,

    /// 被丟棄的 SKU（排序、去重）
    pub dropped_skus: Vec<String>,
}

impl MergeReport {
    /// 丟棄的總列數
    pub fn dropped_rows(&self) -> usize {
        self.dropped_missing_sku + self.dropped_missing_warehouse
    }

    /// 是否有資料列被丟棄
    pub fn has_drops(&self) -> bool {
        self.dropped_rows() > 0
    }
}

/// 內連接三張表
///
/// 先與物料主檔連接，再與中央倉庫存連接。結果保留分店庫存的輸入順序；
/// 任一參考表缺少的 SKU 直接丟棄，只記錄在 [`MergeReport`] 中。
/// 參考表的 SKU 應唯一，重複時以第一筆為準。
pub fn merge(
    branch_inventory: &[BranchInventory],
    sku_master: &[SkuRecord],
    warehouse_stock: &[WarehouseStock],
) -> (Vec<MergedRow>, MergeReport) {
    let mut sku_map: HashMap<&str, &SkuRecord> = HashMap::with_capacity(sku_master.len());
    for record in sku_master {
        sku_map.entry(record.sku.as_str()).or_insert(record);
    }

    let mut warehouse_map: HashMap<&str, Decimal> = HashMap::with_capacity(warehouse_stock.len());
    for stock in warehouse_stock {
        warehouse_map
            .entry(stock.sku.as_str())
            .or_insert(stock.warehouse_stock);
    }

    let mut report = MergeReport {
        input_rows: branch_inventory.len(),
        ..MergeReport::default()
    };
    let mut dropped: BTreeSet<&str> = BTreeSet::new();
    let mut rows = Vec::with_capacity(branch_inventory.len());

    for inventory in branch_inventory {
        let Some(sku) = sku_map.get(inventory.sku.as_str()) else {
            report.dropped_missing_sku += 1;
            dropped.insert(inventory.sku.as_str());
            continue;
        };

        let Some(&stock) = warehouse_map.get(inventory.sku.as_str()) else {
            report.dropped_missing_warehouse += 1;
            dropped.insert(inventory.sku.as_str());
            continue;
        };

        rows.push(MergedRow::join(inventory, sku, stock));
    }

    report.merged_rows = rows.len();
    report.dropped_skus = dropped.into_iter().map(str::to_string).collect();

    (rows, report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inventory(sku: &str, branch: &str) -> BranchInventory {
        BranchInventory::new(
            sku.to_string(),
            branch.to_string(),
            Decimal::from(5),
            Decimal::from(10),
            Decimal::from(50),
        )
    }

    fn sku(sku: &str, vendor: &str) -> SkuRecord {
        SkuRecord::new(sku.to_string(), format!("Product {}", sku), vendor.to_string())
    }

    #[test]
    fn test_merge_inner_join() {
        let branch_inventory = vec![
            inventory("SKU-B", "BR001"),
            inventory("SKU-A", "BR001"),
            inventory("SKU-A", "BR002"),
        ];
        let sku_master = vec![sku("SKU-A", "VendorA"), sku("SKU-B", "VendorB")];
        let warehouse = vec![
            WarehouseStock::new("SKU-A".to_string(), Decimal::from(30)),
            WarehouseStock::new("SKU-B".to_string(), Decimal::from(7)),
        ];

        let (rows, report) = merge(&branch_inventory, &sku_master, &warehouse);

        assert_eq!(rows.len(), 3);
        assert!(!report.has_drops());

        // 保留分店庫存的輸入順序
        assert_eq!(rows[0].sku, "SKU-B");
        assert_eq!(rows[0].vendor, "VendorB");
        assert_eq!(rows[0].warehouse_stock, Decimal::from(7));
        assert_eq!(rows[1].branch, "BR001");
        assert_eq!(rows[2].branch, "BR002");
        assert_eq!(rows[2].warehouse_stock, Decimal::from(30));
    }

    #[test]
    fn test_merge_drops_unmatched_skus() {
        let branch_inventory = vec![
            inventory("SKU-A", "BR001"),
            inventory("SKU-NOMASTER", "BR001"),
            inventory("SKU-NOWH", "BR001"),
            inventory("SKU-NOWH", "BR002"),
        ];
        let sku_master = vec![sku("SKU-A", "VendorA"), sku("SKU-NOWH", "VendorC")];
        let warehouse = vec![
            WarehouseStock::new("SKU-A".to_string(), Decimal::from(30)),
            WarehouseStock::new("SKU-NOMASTER".to_string(), Decimal::from(30)),
        ];

        let (rows, report) = merge(&branch_inventory, &sku_master, &warehouse);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].sku, "SKU-A");

        assert_eq!(report.input_rows, 4);
        assert_eq!(report.merged_rows, 1);
        assert_eq!(report.dropped_missing_sku, 1);
        assert_eq!(report.dropped_missing_warehouse, 2);
        assert_eq!(report.dropped_rows(), 3);
        assert_eq!(
            report.dropped_skus,
            vec!["SKU-NOMASTER".to_string(), "SKU-NOWH".to_string()]
        );
    }

    #[test]
    fn test_merge_empty_inputs() {
        let (rows, report) = merge(&[], &[], &[]);
        assert!(rows.is_empty());
        assert_eq!(report, MergeReport::default());
    }
}

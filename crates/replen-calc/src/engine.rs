//! 補貨主計算器

use replen_core::{
    BranchInventory, InputEntity, ReplenError, ReplenishmentConfig, SkuRecord, WarehouseStock,
};
use std::collections::{BTreeSet, HashSet};

use crate::{ReplenWarning, ReplenishmentResult};

/// 補貨計算輸入（三張資料表）
///
/// 任一資料表未提供時計算會拒絕執行；提供但為空的資料表是合法輸入。
#[derive(Debug, Clone, Default)]
pub struct ReplenishmentInput {
    pub branch_inventory: Option<Vec<BranchInventory>>,
    pub warehouse_stock: Option<Vec<WarehouseStock>>,
    pub sku_master: Option<Vec<SkuRecord>>,
}

impl ReplenishmentInput {
    /// 創建空的輸入
    pub fn new() -> Self {
        Self::default()
    }

    /// 由三張完整的資料表創建輸入
    pub fn from_tables(
        branch_inventory: Vec<BranchInventory>,
        warehouse_stock: Vec<WarehouseStock>,
        sku_master: Vec<SkuRecord>,
    ) -> Self {
        Self {
            branch_inventory: Some(branch_inventory),
            warehouse_stock: Some(warehouse_stock),
            sku_master: Some(sku_master),
        }
    }

    /// 建構器模式：設置分店庫存
    pub fn with_branch_inventory(mut self, rows: Vec<BranchInventory>) -> Self {
        self.branch_inventory = Some(rows);
        self
    }

    /// 建構器模式：設置中央倉庫存
    pub fn with_warehouse_stock(mut self, rows: Vec<WarehouseStock>) -> Self {
        self.warehouse_stock = Some(rows);
        self
    }

    /// 建構器模式：設置物料主檔
    pub fn with_sku_master(mut self, rows: Vec<SkuRecord>) -> Self {
        self.sku_master = Some(rows);
        self
    }
}

/// 補貨計算器
pub struct ReplenishmentEngine {
    config: ReplenishmentConfig,
}

impl ReplenishmentEngine {
    /// 創建新的補貨計算器
    pub fn new(config: ReplenishmentConfig) -> Self {
        Self { config }
    }

    /// 主計算入口
    ///
    /// 合併 → {分配, 超量判定}；兩個下游階段互不影響。
    pub fn run(&self, input: ReplenishmentInput) -> replen_core::Result<ReplenishmentResult> {
        self.config.validate()?;

        let branch_inventory = input
            .branch_inventory
            .ok_or(ReplenError::MissingInput(InputEntity::BranchInventory))?;
        let warehouse_stock = input
            .warehouse_stock
            .ok_or(ReplenError::MissingInput(InputEntity::WarehouseStock))?;
        let sku_master = input
            .sku_master
            .ok_or(ReplenError::MissingInput(InputEntity::SkuMaster))?;

        tracing::info!(
            "開始補貨計算：分店庫存 {} 筆，中央倉庫存 {} 筆，物料主檔 {} 筆",
            branch_inventory.len(),
            warehouse_stock.len(),
            sku_master.len()
        );

        let start_time = std::time::Instant::now();

        // Step 0: 輸入檢查
        tracing::debug!("Step 0: 輸入檢查");
        let input_warnings = validate_inputs(&branch_inventory, &warehouse_stock, &sku_master)?;

        // Step 1: 合併
        tracing::debug!("Step 1: 合併資料表");
        let (merged, merge_report) =
            crate::merge::merge(&branch_inventory, &sku_master, &warehouse_stock);
        tracing::debug!("合併後 {} 筆", merged.len());

        let mut result = ReplenishmentResult::empty();
        for warning in input_warnings {
            result.add_warning(warning);
        }

        if merge_report.dropped_missing_sku > 0 {
            tracing::warn!(
                "物料主檔缺少 SKU，丟棄分店庫存 {} 筆",
                merge_report.dropped_missing_sku
            );
            result.add_warning(ReplenWarning::warning(
                InputEntity::SkuMaster,
                format!(
                    "物料主檔缺少 SKU，丟棄 {} 筆分店庫存",
                    merge_report.dropped_missing_sku
                ),
            ));
        }
        if merge_report.dropped_missing_warehouse > 0 {
            tracing::warn!(
                "中央倉庫存缺少 SKU，丟棄分店庫存 {} 筆",
                merge_report.dropped_missing_warehouse
            );
            result.add_warning(ReplenWarning::warning(
                InputEntity::WarehouseStock,
                format!(
                    "中央倉庫存缺少 SKU，丟棄 {} 筆分店庫存",
                    merge_report.dropped_missing_warehouse
                ),
            ));
        }
        if merge_report.has_drops() {
            tracing::debug!("被丟棄的 SKU: {:?}", merge_report.dropped_skus);
            result.add_warning(ReplenWarning::info(
                InputEntity::BranchInventory,
                format!("被丟棄的 SKU: {}", merge_report.dropped_skus.join(", ")),
            ));
        }

        // Step 2: 中央倉分配與採購缺口
        tracing::debug!("Step 2: 中央倉分配");
        let allocation = crate::allocation::allocate(
            &merged,
            &warehouse_stock,
            &self.config.source_warehouse_id,
        )?;

        // Step 3: 超量庫存判定
        tracing::debug!("Step 3: 超量庫存判定");
        let annotated = crate::excess::annotate(&merged, &self.config)?;
        let excess_findings = crate::excess::detect_excess(&annotated);

        result.annotated = annotated;
        result.transfer_orders = allocation.transfer_orders;
        result.lpo_triggers = allocation.lpo_triggers;
        result.purchase_needs = allocation.purchase_needs;
        result.excess_findings = excess_findings;
        result.merge_report = merge_report;
        result.calculation_time_ms = Some(start_time.elapsed().as_millis());

        tracing::info!("補貨計算完成，耗時 {:?}", start_time.elapsed());
        tracing::info!(
            "調撥單 {} 筆，採購需求 {} 筆，超量庫存 {} 筆",
            result.transfer_orders.len(),
            result.purchase_needs.len(),
            result.excess_findings.len()
        );

        Ok(result)
    }

    /// 獲取配置引用
    pub fn config(&self) -> &ReplenishmentConfig {
        &self.config
    }
}

impl Default for ReplenishmentEngine {
    fn default() -> Self {
        Self::new(ReplenishmentConfig::default())
    }
}

/// 檢查輸入資料列
///
/// 主鍵欄位空白的列立即返回錯誤；參考表中重複的 SKU 以第一筆為準並產生警告。
fn validate_inputs(
    branch_inventory: &[BranchInventory],
    warehouse_stock: &[WarehouseStock],
    sku_master: &[SkuRecord],
) -> replen_core::Result<Vec<ReplenWarning>> {
    for (index, row) in branch_inventory.iter().enumerate() {
        row.validate().map_err(|reason| ReplenError::InvalidRecord {
            entity: InputEntity::BranchInventory,
            index,
            reason,
        })?;
    }

    for (index, row) in warehouse_stock.iter().enumerate() {
        row.validate().map_err(|reason| ReplenError::InvalidRecord {
            entity: InputEntity::WarehouseStock,
            index,
            reason,
        })?;
    }

    for (index, row) in sku_master.iter().enumerate() {
        row.validate().map_err(|reason| ReplenError::InvalidRecord {
            entity: InputEntity::SkuMaster,
            index,
            reason,
        })?;
    }

    let mut warnings = Vec::new();
    let duplicates = duplicate_skus(warehouse_stock.iter().map(|row| row.sku.as_str()));
    if !duplicates.is_empty() {
        tracing::warn!("中央倉庫存 SKU 重複，以第一筆為準: {:?}", duplicates);
        warnings.push(ReplenWarning::warning(
            InputEntity::WarehouseStock,
            format!("SKU 重複，以第一筆為準: {}", duplicates.join(", ")),
        ));
    }
    let duplicates = duplicate_skus(sku_master.iter().map(|row| row.sku.as_str()));
    if !duplicates.is_empty() {
        tracing::warn!("物料主檔 SKU 重複，以第一筆為準: {:?}", duplicates);
        warnings.push(ReplenWarning::warning(
            InputEntity::SkuMaster,
            format!("SKU 重複，以第一筆為準: {}", duplicates.join(", ")),
        ));
    }

    Ok(warnings)
}

/// 找出重複的 SKU（排序、去重）
fn duplicate_skus<'a>(skus: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    let mut duplicates = BTreeSet::new();
    for sku in skus {
        if !seen.insert(sku) {
            duplicates.insert(sku);
        }
    }
    duplicates.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WarningSeverity;
    use rust_decimal::Decimal;

    fn tables() -> (Vec<BranchInventory>, Vec<WarehouseStock>, Vec<SkuRecord>) {
        (
            vec![BranchInventory::new(
                "X".to_string(),
                "BR001".to_string(),
                Decimal::from(5),
                Decimal::from(10),
                Decimal::from(50),
            )],
            vec![WarehouseStock::new("X".to_string(), Decimal::from(30))],
            vec![SkuRecord::new(
                "X".to_string(),
                "Product X".to_string(),
                "VendorA".to_string(),
            )],
        )
    }

    #[test]
    fn test_missing_inputs_are_named() {
        let (branch, warehouse, sku) = tables();
        let engine = ReplenishmentEngine::default();

        let err = engine
            .run(
                ReplenishmentInput::new()
                    .with_warehouse_stock(warehouse.clone())
                    .with_sku_master(sku.clone()),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            ReplenError::MissingInput(InputEntity::BranchInventory)
        ));

        let err = engine
            .run(
                ReplenishmentInput::new()
                    .with_branch_inventory(branch.clone())
                    .with_sku_master(sku),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            ReplenError::MissingInput(InputEntity::WarehouseStock)
        ));

        let err = engine
            .run(
                ReplenishmentInput::new()
                    .with_branch_inventory(branch)
                    .with_warehouse_stock(warehouse),
            )
            .unwrap_err();
        assert!(matches!(err, ReplenError::MissingInput(InputEntity::SkuMaster)));
    }

    #[test]
    fn test_duplicate_warehouse_sku_uses_first_row() {
        let (branch, mut warehouse, sku) = tables();
        warehouse.push(WarehouseStock::new("X".to_string(), Decimal::from(1)));

        let result = ReplenishmentEngine::default()
            .run(ReplenishmentInput::from_tables(branch, warehouse, sku))
            .unwrap();

        assert_eq!(result.annotated.len(), 1);
        assert_eq!(result.annotated[0].row.warehouse_stock, Decimal::from(30));
        assert_eq!(result.transfer_orders[0].transfer_qty, Decimal::from(30));
        assert_eq!(result.purchase_needs[0].required_qty, Decimal::from(15));

        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].entity, InputEntity::WarehouseStock);
        assert_eq!(result.warnings[0].severity, WarningSeverity::Warning);
        assert!(result.warnings[0].message.contains('X'));
    }

    #[test]
    fn test_duplicate_sku_master_uses_first_row() {
        let (branch, warehouse, mut sku) = tables();
        sku.push(SkuRecord::new(
            "X".to_string(),
            "Product X (old)".to_string(),
            "VendorB".to_string(),
        ));

        let result = ReplenishmentEngine::default()
            .run(ReplenishmentInput::from_tables(branch, warehouse, sku))
            .unwrap();

        assert_eq!(result.annotated.len(), 1);
        assert_eq!(result.purchase_needs[0].vendor, "VendorA");
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].entity, InputEntity::SkuMaster);
    }

    #[test]
    fn test_duplicate_skus_sorted_and_distinct() {
        let skus = ["B", "A", "B", "C", "A", "B"];
        assert_eq!(duplicate_skus(skus.iter().copied()), vec!["A", "B"]);
    }

    #[test]
    fn test_invalid_record_index() {
        let (mut branch, warehouse, sku) = tables();
        branch.push(BranchInventory::new(
            "X".to_string(),
            "".to_string(),
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
        ));

        let err = ReplenishmentEngine::default()
            .run(ReplenishmentInput::from_tables(branch, warehouse, sku))
            .unwrap_err();

        match err {
            ReplenError::InvalidRecord { entity, index, .. } => {
                assert_eq!(entity, InputEntity::BranchInventory);
                assert_eq!(index, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let (branch, warehouse, sku) = tables();
        let engine =
            ReplenishmentEngine::new(ReplenishmentConfig::default().with_sales_window_days(0));

        let err = engine
            .run(ReplenishmentInput::from_tables(branch, warehouse, sku))
            .unwrap_err();
        assert!(matches!(err, ReplenError::ConfigInvalid(_)));
    }

    #[test]
    fn test_empty_tables_are_valid() {
        let result = ReplenishmentEngine::default()
            .run(ReplenishmentInput::from_tables(vec![], vec![], vec![]))
            .unwrap();

        assert!(result.annotated.is_empty());
        assert!(result.transfer_orders.is_empty());
        assert!(result.purchase_needs.is_empty());
        assert!(result.excess_findings.is_empty());
        assert!(result.warnings.is_empty());
    }
}

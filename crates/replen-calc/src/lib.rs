//! # Replenishment Calculation Engine
//!
//! 中央倉對多分店的補貨計算：合併、補貨需求、中央倉分配、採購缺口、超量庫存

pub mod allocation;
pub mod engine;
pub mod excess;
pub mod merge;
pub mod reorder;
pub mod report;

// Re-export 主要類型
pub use allocation::{AllocationOutcome, WarehousePool};
pub use engine::{ReplenishmentEngine, ReplenishmentInput};
pub use merge::MergeReport;
pub use report::Table;

use replen_core::{
    AnnotatedRow, ExcessFinding, InputEntity, LpoTrigger, PurchaseNeed, TransferOrder,
};

/// 補貨計算結果
#[derive(Debug, Clone)]
pub struct ReplenishmentResult {
    /// 合併視圖（含計算欄位）
    pub annotated: Vec<AnnotatedRow>,

    /// 調撥單
    pub transfer_orders: Vec<TransferOrder>,

    /// 採購需求（按 SKU × 供應商彙總）
    pub purchase_needs: Vec<PurchaseNeed>,

    /// 觸發採購的分店缺口明細
    pub lpo_triggers: Vec<LpoTrigger>,

    /// 超量庫存
    pub excess_findings: Vec<ExcessFinding>,

    /// 合併統計
    pub merge_report: MergeReport,

    /// 警告信息
    pub warnings: Vec<ReplenWarning>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl ReplenishmentResult {
    /// 創建空的計算結果
    pub fn empty() -> Self {
        Self {
            annotated: Vec::new(),
            transfer_orders: Vec::new(),
            purchase_needs: Vec::new(),
            lpo_triggers: Vec::new(),
            excess_findings: Vec::new(),
            merge_report: MergeReport::default(),
            warnings: Vec::new(),
            calculation_time_ms: None,
        }
    }

    /// 添加警告
    pub fn add_warning(&mut self, warning: ReplenWarning) {
        self.warnings.push(warning);
    }

    /// 計算摘要
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            merged_rows: self.annotated.len(),
            dropped_rows: self.merge_report.dropped_rows(),
            transfer_orders: self.transfer_orders.len(),
            purchase_needs: self.purchase_needs.len(),
            excess_findings: self.excess_findings.len(),
        }
    }
}

/// 計算摘要（各輸出的筆數）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub merged_rows: usize,
    pub dropped_rows: usize,
    pub transfer_orders: usize,
    pub purchase_needs: usize,
    pub excess_findings: usize,
}

/// 補貨警告
#[derive(Debug, Clone)]
pub struct ReplenWarning {
    pub entity: InputEntity,
    pub message: String,
    pub severity: WarningSeverity,
}

impl ReplenWarning {
    pub fn new(entity: InputEntity, message: String, severity: WarningSeverity) -> Self {
        Self {
            entity,
            message,
            severity,
        }
    }

    pub fn info(entity: InputEntity, message: String) -> Self {
        Self::new(entity, message, WarningSeverity::Info)
    }

    pub fn warning(entity: InputEntity, message: String) -> Self {
        Self::new(entity, message, WarningSeverity::Warning)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningSeverity {
    Info,
    Warning,
}

//! # Replen
//!
//! 中央倉 + 多分店補貨引擎（Hub-and-Spoke）
//!
//! 對外入口：重新匯出核心資料模型與計算引擎。

pub use replen_calc::{
    allocation, excess, merge, reorder, report, MergeReport, ReplenWarning, ReplenishmentEngine,
    ReplenishmentInput, ReplenishmentResult, RunSummary, Table, WarningSeverity,
};
pub use replen_core::{
    AnnotatedRow, BranchInventory, ExcessFinding, InputEntity, LpoTrigger, MergedRow,
    PurchaseNeed, ReplenError, ReplenishmentConfig, ShortfallReason, SkuRecord,
    TransferOrder, WarehouseStock,
};

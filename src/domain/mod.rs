// ==========================================
// 订单条码报表 - 领域模型层
// ==========================================
// 职责: 定义订单、条码、倒排索引、诊断记录
// 红线: 不含文件读写逻辑,不含关联逻辑
// ==========================================

pub mod barcode;
pub mod diagnostics;
pub mod order;

// 重导出核心类型
pub use barcode::{BarcodeAssignment, InvertedIndex, UnassignedBarcodes};
pub use diagnostics::{
    DiagnosticEvent, DiagnosticLevel, DiagnosticReport, DiagnosticSummary, Diagnostics,
};
pub use order::OrderRecord;

// ==========================================
// 订单条码报表 - 核心库
// ==========================================
// 输入: orders.csv (order_id,customer_id) + barcodes.csv (barcode,order_id)
// 输出: customer_id,order_id,barcode1,barcode2,...
// 诊断: 条码冲突 / 无条码订单 / 未分配条码
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - 解析与倒排索引
pub mod importer;

// 引擎层 - 关联与写出
pub mod engine;

// 配置层
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

pub use config::ReportConfig;
pub use domain::{
    BarcodeAssignment, DiagnosticEvent, DiagnosticLevel, DiagnosticReport, DiagnosticSummary,
    Diagnostics, InvertedIndex, OrderRecord, UnassignedBarcodes,
};
pub use engine::{ReportBuilder, ReportLine, ReportOrchestrator, ReportOutcome, ReportWriter};
pub use importer::{BarcodeIndexer, CsvParser, ImportError, ImportResult, OrderLoader};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "订单条码报表";

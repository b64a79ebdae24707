// ==========================================
// 订单条码报表 - 引擎层
// ==========================================
// 职责: 订单与倒排索引关联、报表写出、流程编排
// 红线: 引擎只处理内存数据，文件读写经由解析器/写出器
// ==========================================

pub mod orchestrator;
pub mod report_builder;
pub mod report_writer;

// 重导出核心引擎
pub use orchestrator::{ReportOrchestrator, ReportOutcome};
pub use report_builder::{ReportBuilder, ReportLine};
pub use report_writer::ReportWriter;

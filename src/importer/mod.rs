// ==========================================
// 订单条码报表 - 导入层
// ==========================================
// 职责: 原始行解析 → 订单列表 / 条码倒排索引
// 支持: CSV
// ==========================================

// 模块声明
pub mod barcode_indexer;
pub mod conflict_handler;
pub mod error;
pub mod file_parser;
pub mod importer_trait;
pub mod order_loader;

// 重导出核心类型
pub use barcode_indexer::{BarcodeIndex, BarcodeIndexer};
pub use conflict_handler::AssignmentLedger;
pub use error::{ImportError, ImportResult};
pub use file_parser::CsvParser;
pub use importer_trait::{number_rows, FileParser, RawRow};
pub use order_loader::OrderLoader;

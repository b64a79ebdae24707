// ==========================================
// 订单条码报表 - 配置层
// ==========================================
// 职责: 输入/输出路径与 CSV 方言配置
// ==========================================

pub mod report_config;

// 重导出
pub use report_config::{
    ReportConfig, DEFAULT_BARCODES_PATH, DEFAULT_ORDERS_PATH, DEFAULT_OUTPUT_PATH,
};

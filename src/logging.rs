// ==========================================
// 日志系统初始化与诊断输出
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 支持环境变量配置日志级别与输出格式
// 诊断信息只走日志流，不写入报表文件
// ==========================================

use crate::domain::{DiagnosticEvent, Diagnostics};
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

/// 日志格式环境变量
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

// ==========================================
// LogFormat - 日志输出格式
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text, // 人读文本（默认）
    Json, // 每行一个 JSON 对象
}

impl LogFormat {
    /// 解析 LOG_FORMAT 取值，未设置或无法识别时为 Text
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

/// 初始化日志系统
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器（默认: info）
///   例如: RUST_LOG=debug 或 RUST_LOG=order_barcode_report=trace
/// - LOG_FORMAT: text（默认）或 json
///
/// # 示例
/// ```no_run
/// use order_barcode_report::logging;
/// logging::init();
/// ```
pub fn init() {
    // 从环境变量读取日志级别，默认为 info
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let format = LogFormat::from_env_value(std::env::var(LOG_FORMAT_ENV).ok().as_deref());

    // 日志写 stderr，与 stdout 摘要分离
    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

/// 初始化测试环境的日志系统
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

/// 按级别输出诊断事件，并以 info 级别汇总未分配条码
pub fn emit_diagnostics(diagnostics: &Diagnostics, unassigned: &[String]) {
    for event in diagnostics.events() {
        match event {
            DiagnosticEvent::BarcodeConflict {
                row_number,
                barcode,
                held_by,
                attempted,
            } => error!(
                row_number,
                barcode = %barcode,
                held_by = %held_by,
                attempted = %attempted.as_deref().unwrap_or(""),
                "条码已分配，忽略新分配"
            ),
            DiagnosticEvent::OrderWithoutBarcodes {
                row_number,
                order_id,
                customer_id,
            } => warn!(
                row_number,
                order_id = %order_id,
                customer_id = %customer_id,
                "订单无已分配条码"
            ),
            DiagnosticEvent::UnassignedPromoted {
                row_number,
                barcode,
                order_id,
            } => info!(
                row_number,
                barcode = %barcode,
                order_id = %order_id,
                "未分配条码被分配到订单"
            ),
        }
    }

    info!(
        unassigned_count = unassigned.len(),
        barcodes = %unassigned.join(", "),
        "未分配条码汇总"
    );
}

/// 未使用条码摘要行
pub fn unused_barcodes_line(unassigned: &[String]) -> String {
    format!("unused barcodes: {}", unassigned.join(", "))
}

// ==========================================
// 订单条码报表 - 诊断记录
// ==========================================
// 职责: 收集各组件产生的可恢复事件（冲突/缺失/提升）
// 红线: 组件只写入收集器，不直接输出日志；
//       渲染方式由调用方决定（见 logging::emit_diagnostics）
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ==========================================
// DiagnosticLevel - 诊断级别
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiagnosticLevel {
    Error,   // 错误（该行被丢弃）
    Warning, // 警告（该订单不出报表）
    Info,    // 提示（仅记录）
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Error => write!(f, "ERROR"),
            DiagnosticLevel::Warning => write!(f, "WARNING"),
            DiagnosticLevel::Info => write!(f, "INFO"),
        }
    }
}

// ==========================================
// DiagnosticEvent - 诊断事件
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticEvent {
    /// 条码已被先前的行分配，本行被丢弃（先到先得）
    BarcodeConflict {
        row_number: usize,
        barcode: String,
        held_by: String,
        attempted: Option<String>,
    },
    /// 先前列为未分配的条码在后续行被分配，移出未分配列表
    UnassignedPromoted {
        row_number: usize,
        barcode: String,
        order_id: String,
    },
    /// 订单在倒排索引中无条目，不输出报表行
    OrderWithoutBarcodes {
        row_number: usize,
        order_id: String,
        customer_id: String,
    },
}

impl DiagnosticEvent {
    pub fn level(&self) -> DiagnosticLevel {
        match self {
            DiagnosticEvent::BarcodeConflict { .. } => DiagnosticLevel::Error,
            DiagnosticEvent::OrderWithoutBarcodes { .. } => DiagnosticLevel::Warning,
            DiagnosticEvent::UnassignedPromoted { .. } => DiagnosticLevel::Info,
        }
    }

    pub fn row_number(&self) -> usize {
        match self {
            DiagnosticEvent::BarcodeConflict { row_number, .. }
            | DiagnosticEvent::UnassignedPromoted { row_number, .. }
            | DiagnosticEvent::OrderWithoutBarcodes { row_number, .. } => *row_number,
        }
    }
}

impl fmt::Display for DiagnosticEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticEvent::BarcodeConflict {
                row_number,
                barcode,
                held_by,
                attempted,
            } => write!(
                f,
                "行 {}: 条码 barcode={} 已分配给 order_id={}，忽略新分配 order_id={}",
                row_number,
                barcode,
                held_by,
                attempted.as_deref().unwrap_or("")
            ),
            DiagnosticEvent::UnassignedPromoted {
                row_number,
                barcode,
                order_id,
            } => write!(
                f,
                "行 {}: 未分配条码 barcode={} 被分配给 order_id={}",
                row_number, barcode, order_id
            ),
            DiagnosticEvent::OrderWithoutBarcodes {
                row_number,
                order_id,
                ..
            } => write!(f, "行 {}: 订单 order_id={} 无已分配条码", row_number, order_id),
        }
    }
}

// ==========================================
// Diagnostics - 诊断收集器
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    events: Vec<DiagnosticEvent>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: DiagnosticEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[DiagnosticEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// 条码冲突事件
    pub fn conflicts(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.events
            .iter()
            .filter(|e| matches!(e, DiagnosticEvent::BarcodeConflict { .. }))
    }

    /// 无条码订单事件
    pub fn orders_without_barcodes(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.events
            .iter()
            .filter(|e| matches!(e, DiagnosticEvent::OrderWithoutBarcodes { .. }))
    }

    pub fn count_level(&self, level: DiagnosticLevel) -> usize {
        self.events.iter().filter(|e| e.level() == level).count()
    }

    pub fn into_events(self) -> Vec<DiagnosticEvent> {
        self.events
    }
}

// ==========================================
// DiagnosticSummary - 诊断汇总
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticSummary {
    pub total_orders: usize,            // 订单总行数
    pub total_barcode_rows: usize,      // 条码总行数
    pub reported_orders: usize,         // 输出报表行数
    pub orders_without_barcodes: usize, // 无条码订单
    pub conflicts: usize,               // 条码冲突
    pub unassigned: usize,              // 未分配条码
}

// ==========================================
// DiagnosticReport - 诊断报告
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticReport {
    pub run_id: String,
    pub generated_at: DateTime<Utc>,
    pub summary: DiagnosticSummary,
    pub events: Vec<DiagnosticEvent>,
    pub unassigned_barcodes: Vec<String>,
}

impl DiagnosticReport {
    pub fn new(
        summary: DiagnosticSummary,
        diagnostics: &Diagnostics,
        unassigned_barcodes: &[String],
    ) -> Self {
        Self {
            run_id: Uuid::new_v4().to_string(),
            generated_at: Utc::now(),
            summary,
            events: diagnostics.events().to_vec(),
            unassigned_barcodes: unassigned_barcodes.to_vec(),
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// ==========================================
// 订单条码报表 - 引擎编排器
// ==========================================
// 流程: 加载订单 → 构建倒排索引 → 关联生成报表 → 写出
// 红线: 输入全部加载并关联完成后才打开输出文件，
//       任一输入失败时不产生输出文件
// ==========================================

use crate::config::ReportConfig;
use crate::domain::{
    DiagnosticReport, DiagnosticSummary, Diagnostics, InvertedIndex, UnassignedBarcodes,
};
use crate::engine::report_builder::{ReportBuilder, ReportLine};
use crate::engine::report_writer::ReportWriter;
use crate::importer::{
    BarcodeIndexer, CsvParser, FileParser, ImportResult, OrderLoader, RawRow,
};
use std::path::Path;
use tracing::{debug, info, instrument};

// ==========================================
// ReportOutcome - 运行结果
// ==========================================
#[derive(Debug, Clone)]
pub struct ReportOutcome {
    pub lines: Vec<ReportLine>,
    pub index: InvertedIndex,
    pub unassigned: UnassignedBarcodes,
    pub diagnostics: Diagnostics,
    pub summary: DiagnosticSummary,
}

impl ReportOutcome {
    /// 生成可序列化的诊断报告
    pub fn diagnostic_report(&self) -> DiagnosticReport {
        DiagnosticReport::new(
            self.summary.clone(),
            &self.diagnostics,
            self.unassigned.as_slice(),
        )
    }
}

// ==========================================
// ReportOrchestrator - 引擎编排器
// ==========================================
pub struct ReportOrchestrator {
    file_parser: Box<dyn FileParser>,
    order_loader: OrderLoader,
    barcode_indexer: BarcodeIndexer,
    report_builder: ReportBuilder,
    report_writer: ReportWriter,
}

impl ReportOrchestrator {
    /// 按配置创建编排器
    pub fn new(config: &ReportConfig) -> ImportResult<Self> {
        config.validate()?;
        Ok(Self::with_parser(
            Box::new(CsvParser::from_config(config)?),
            ReportWriter::new(config.output_separator_byte()?),
        ))
    }

    /// 使用指定解析器创建编排器
    pub fn with_parser(file_parser: Box<dyn FileParser>, report_writer: ReportWriter) -> Self {
        Self {
            file_parser,
            order_loader: OrderLoader,
            barcode_indexer: BarcodeIndexer,
            report_builder: ReportBuilder::new(),
            report_writer,
        }
    }

    /// 在内存行上完成加载与关联（不涉及文件）
    pub fn join_rows(
        &self,
        order_rows: Vec<RawRow>,
        barcode_rows: Vec<RawRow>,
    ) -> ImportResult<ReportOutcome> {
        let mut diagnostics = Diagnostics::new();

        // === 步骤 1: 加载订单 ===
        let orders = self.order_loader.load(order_rows)?;

        // === 步骤 2: 构建倒排索引 ===
        let barcode_index = self.barcode_indexer.build(barcode_rows, &mut diagnostics)?;

        // === 步骤 3: 关联 ===
        let lines = self
            .report_builder
            .build(&orders, &barcode_index.index, &mut diagnostics);

        let summary = DiagnosticSummary {
            total_orders: orders.len(),
            total_barcode_rows: barcode_index.total_rows,
            reported_orders: lines.len(),
            orders_without_barcodes: diagnostics.orders_without_barcodes().count(),
            conflicts: diagnostics.conflicts().count(),
            unassigned: barcode_index.unassigned.len(),
        };
        debug!(?summary, "关联完成");

        Ok(ReportOutcome {
            lines,
            index: barcode_index.index,
            unassigned: barcode_index.unassigned,
            diagnostics,
            summary,
        })
    }

    /// 完整运行：读取两个输入文件，写出报表文件
    #[instrument(skip(self))]
    pub fn run(
        &self,
        orders_path: &Path,
        barcodes_path: &Path,
        output_path: &Path,
    ) -> ImportResult<ReportOutcome> {
        info!("开始生成订单条码报表");

        let order_rows = self.file_parser.parse_rows(orders_path)?;
        let barcode_rows = self.file_parser.parse_rows(barcodes_path)?;
        debug!(
            order_rows = order_rows.len(),
            barcode_rows = barcode_rows.len(),
            "输入文件解析完成"
        );

        let outcome = self.join_rows(order_rows, barcode_rows)?;

        let written = self.report_writer.write_file(&outcome.lines, output_path)?;
        info!(
            written,
            orders_without_barcodes = outcome.summary.orders_without_barcodes,
            conflicts = outcome.summary.conflicts,
            unassigned = outcome.summary.unassigned,
            "报表写出完成"
        );

        Ok(outcome)
    }
}

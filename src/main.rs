// ==========================================
// 订单条码报表 - 命令行入口
// ==========================================
// 用法:
//   order-barcode-report -o orders.csv -b barcodes.csv -O output.csv
// 退出码: 文件打开失败/行格式错误/写出失败 → 非 0
// ==========================================

use anyhow::{Context, Result};
use clap::Parser;
use order_barcode_report::config::ReportConfig;
use order_barcode_report::engine::{ReportOrchestrator, ReportOutcome};
use order_barcode_report::logging;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "order-barcode-report")]
#[command(version, about = "按订单汇总客户与已分配条码")]
struct Cli {
    /// 订单 CSV 文件（order_id,customer_id），默认 orders.csv
    #[arg(short = 'o', long)]
    orders: Option<PathBuf>,

    /// 条码 CSV 文件（barcode,order_id），默认 barcodes.csv
    #[arg(short = 'b', long)]
    barcodes: Option<PathBuf>,

    /// 报表输出文件，默认 output.csv
    #[arg(short = 'O', long)]
    output: Option<PathBuf>,

    /// JSON 配置文件（命令行参数优先）
    #[arg(short = 'c', long, env = "ORDER_BARCODE_REPORT_CONFIG")]
    config: Option<PathBuf>,

    /// 诊断报告 JSON 输出路径
    #[arg(long)]
    diagnostics_json: Option<PathBuf>,
}

impl Cli {
    /// 合并配置：默认值 → 配置文件 → 命令行参数
    fn resolve_config(&self) -> Result<ReportConfig> {
        let mut config = match &self.config {
            Some(path) => ReportConfig::from_json_file(path)
                .with_context(|| format!("无法加载配置文件 {}", path.display()))?,
            None => ReportConfig::default(),
        };

        if let Some(orders) = &self.orders {
            config.orders_path = orders.clone();
        }
        if let Some(barcodes) = &self.barcodes {
            config.barcodes_path = barcodes.clone();
        }
        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }
        Ok(config)
    }
}

/// 生成报表，按需写出诊断报告
fn execute(cli: &Cli) -> Result<ReportOutcome> {
    let config = cli.resolve_config()?;

    let orchestrator = ReportOrchestrator::new(&config).context("配置无效")?;
    let outcome = orchestrator
        .run(&config.orders_path, &config.barcodes_path, &config.output_path)
        .context("报表生成失败")?;

    if let Some(path) = &cli.diagnostics_json {
        write_diagnostics_json(&outcome, path)?;
    }

    Ok(outcome)
}

fn write_diagnostics_json(outcome: &ReportOutcome, path: &Path) -> Result<()> {
    let report = outcome.diagnostic_report().to_json_pretty()?;
    fs::write(path, report).with_context(|| format!("无法写出诊断报告 {}", path.display()))
}

fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();
    tracing::info!("订单条码报表 v{}", order_barcode_report::VERSION);

    let outcome = execute(&cli)?;

    logging::emit_diagnostics(&outcome.diagnostics, outcome.unassigned.as_slice());
    println!(
        "{}",
        logging::unused_barcodes_line(outcome.unassigned.as_slice())
    );

    Ok(())
}

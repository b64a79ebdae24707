// ==========================================
// 端到端集成测试 - 订单条码报表完整流程
// ==========================================
// 测试目标: 文件输入 → 倒排索引 → 关联 → 文件输出
// 覆盖范围: ReportOrchestrator + CsvParser + ReportWriter
// ==========================================


use order_barcode_report::config::ReportConfig;
use order_barcode_report::domain::{DiagnosticEvent, DiagnosticLevel};
use order_barcode_report::engine::ReportOrchestrator;
use order_barcode_report::importer::ImportError;
use order_barcode_report::logging;
use std::fs;
use test_helpers::{create_workspace, BASIC_BARCODES, BASIC_ORDERS};

fn orchestrator() -> ReportOrchestrator {
    ReportOrchestrator::new(&ReportConfig::default()).expect("默认配置应有效")
}

// ==========================================
// 测试用例 1: 基础场景
// ==========================================
#[test]
fn test_basic_report_written() {
    logging::init_test();
    let ws = create_workspace(BASIC_ORDERS, BASIC_BARCODES).unwrap();

    let outcome = orchestrator()
        .run(&ws.orders_path, &ws.barcodes_path, &ws.output_path)
        .unwrap();

    let output = fs::read_to_string(&ws.output_path).unwrap();
    assert_eq!(output, "10,1,11111111111\n11,2,11111111112\n");
    assert_eq!(outcome.unassigned.as_slice(), &["11111111113".to_string()]);
    assert!(outcome.diagnostics.is_empty());
}

// ==========================================
// 测试用例 2: 重复分配 → 先到先得
// ==========================================
#[test]
fn test_conflicting_assignment_first_wins() {
    logging::init_test();
    let ws = create_workspace(
        BASIC_ORDERS,
        "barcode,order_id\n11111111111,1\n11111111111,2\n11111111112,2\n",
    )
    .unwrap();

    let outcome = orchestrator()
        .run(&ws.orders_path, &ws.barcodes_path, &ws.output_path)
        .unwrap();

    let output = fs::read_to_string(&ws.output_path).unwrap();
    assert_eq!(output, "10,1,11111111111\n11,2,11111111112\n");
    assert_eq!(
        outcome.index.barcodes_for("2"),
        Some(&["11111111112".to_string()][..])
    );
    assert_eq!(outcome.summary.conflicts, 1);
    assert_eq!(
        outcome.diagnostics.count_level(DiagnosticLevel::Error),
        1
    );
}

// ==========================================
// 测试用例 3: 订单无条码 → 不输出，记录警告
// ==========================================
#[test]
fn test_order_without_barcodes_skipped() {
    logging::init_test();
    let ws = create_workspace(
        "order_id,customer_id\n1,10\n3,12\n2,11\n",
        BASIC_BARCODES,
    )
    .unwrap();

    let outcome = orchestrator()
        .run(&ws.orders_path, &ws.barcodes_path, &ws.output_path)
        .unwrap();

    let output = fs::read_to_string(&ws.output_path).unwrap();
    assert_eq!(output, "10,1,11111111111\n11,2,11111111112\n");

    let missing: Vec<_> = outcome.diagnostics.orders_without_barcodes().collect();
    assert_eq!(missing.len(), 1);
    assert!(matches!(
        missing[0],
        DiagnosticEvent::OrderWithoutBarcodes { order_id, row_number: 3, .. } if order_id == "3"
    ));
}

// ==========================================
// 测试用例 4: 多条码订单 + 引号字段
// ==========================================
#[test]
fn test_multiple_barcodes_and_quoted_input() {
    let ws = create_workspace(
        "\"order_id\",\"customer_id\"\n\"5\",\"50\"\n",
        "barcode,order_id\n\"B1\",\"5\"\nB2,5\nB3,5\n",
    )
    .unwrap();

    orchestrator()
        .run(&ws.orders_path, &ws.barcodes_path, &ws.output_path)
        .unwrap();

    let output = fs::read_to_string(&ws.output_path).unwrap();
    assert_eq!(output, "50,5,B1,B2,B3\n");
}

// ==========================================
// 测试用例 5: 输入文件缺失 → 致命错误，不产生输出
// ==========================================
#[test]
fn test_missing_input_produces_no_output() {
    let ws = create_workspace(BASIC_ORDERS, BASIC_BARCODES).unwrap();
    fs::remove_file(&ws.barcodes_path).unwrap();

    let result = orchestrator().run(&ws.orders_path, &ws.barcodes_path, &ws.output_path);

    assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    assert!(!ws.output_path.exists());
}

// ==========================================
// 测试用例 6: 行格式错误 → 致命错误，不产生输出
// ==========================================
#[test]
fn test_malformed_row_aborts_run() {
    let ws = create_workspace("order_id,customer_id\n1,10,extra\n", BASIC_BARCODES).unwrap();

    let result = orchestrator().run(&ws.orders_path, &ws.barcodes_path, &ws.output_path);

    assert!(matches!(
        result,
        Err(ImportError::MalformedRow {
            row: 2,
            expected: 2,
            actual: 3
        })
    ));
    assert!(!ws.output_path.exists());
}

// ==========================================
// 测试用例 7: 自定义分隔符配置
// ==========================================
#[test]
fn test_custom_delimiters() {
    let ws = create_workspace(
        "order_id;customer_id\n1;10\n",
        "barcode;order_id\n11111111111;1\n",
    )
    .unwrap();
    let config = ReportConfig {
        delimiter: ';',
        output_separator: '|',
        ..Default::default()
    };

    ReportOrchestrator::new(&config)
        .unwrap()
        .run(&ws.orders_path, &ws.barcodes_path, &ws.output_path)
        .unwrap();

    let output = fs::read_to_string(&ws.output_path).unwrap();
    assert_eq!(output, "10|1|11111111111\n");
}

// ==========================================
// 测试用例 8: 诊断报告 JSON
// ==========================================
#[test]
fn test_diagnostic_report_json() {
    let ws = create_workspace(
        "order_id,customer_id\n1,10\n3,12\n",
        "barcode,order_id\n11111111111,1\n11111111111,2\n11111111113,\n",
    )
    .unwrap();

    let outcome = orchestrator()
        .run(&ws.orders_path, &ws.barcodes_path, &ws.output_path)
        .unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&outcome.diagnostic_report().to_json_pretty().unwrap()).unwrap();

    assert_eq!(json["summary"]["total_orders"], 2);
    assert_eq!(json["summary"]["reported_orders"], 1);
    assert_eq!(json["summary"]["conflicts"], 1);
    assert_eq!(json["summary"]["orders_without_barcodes"], 1);
    assert_eq!(json["unassigned_barcodes"][0], "11111111113");
    assert_eq!(json["events"].as_array().unwrap().len(), 2);
}

// ==========================================
// 测试用例 9: 空行与 BOM → 诊断行号对应物理行
// ==========================================
#[test]
fn test_diagnostic_rows_count_blank_lines() {
    logging::init_test();
    let ws = create_workspace(
        "\u{feff}order_id,customer_id\n\n1,10\n\n\n3,12\n",
        "barcode,order_id\r\n\r\n11111111111,1\r\n\r\n\"11111111111\",\"2\"\r\n",
    )
    .unwrap();

    let outcome = orchestrator()
        .run(&ws.orders_path, &ws.barcodes_path, &ws.output_path)
        .unwrap();

    let output = fs::read_to_string(&ws.output_path).unwrap();
    assert_eq!(output, "10,1,11111111111\n");

    let conflicts: Vec<_> = outcome.diagnostics.conflicts().collect();
    assert_eq!(conflicts.len(), 1);
    assert!(matches!(
        conflicts[0],
        DiagnosticEvent::BarcodeConflict { row_number: 5, .. }
    ));

    let missing: Vec<_> = outcome.diagnostics.orders_without_barcodes().collect();
    assert!(matches!(
        missing[0],
        DiagnosticEvent::OrderWithoutBarcodes { order_id, row_number: 6, .. } if order_id == "3"
    ));
}

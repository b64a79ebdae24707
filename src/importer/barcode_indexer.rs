// ==========================================
// 订单条码报表 - 条码倒排索引构建
// ==========================================
// 输入: 原始行（第一行为表头，无条件丢弃），列: barcode, order_id
// 输出: 倒排索引 (order_id → barcodes) + 未分配条码列表
// ==========================================
// 规则（逐行，按文件顺序）:
// 1. 条码已被分配 → 拒绝本行，记录冲突（不进入未分配列表）
// 2. order_id 为空 → 进入未分配列表（同一条码只列一次）
// 3. 否则 → 登记归属并追加到订单条目；
//    若该条码此前列为未分配，则移出未分配列表
// ==========================================

use crate::domain::{
    BarcodeAssignment, DiagnosticEvent, Diagnostics, InvertedIndex, UnassignedBarcodes,
};
use crate::importer::conflict_handler::AssignmentLedger;
use crate::importer::error::ImportResult;
use crate::importer::importer_trait::RawRow;
use tracing::debug;

// ==========================================
// BarcodeIndex - 索引构建结果
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BarcodeIndex {
    pub index: InvertedIndex,
    pub unassigned: UnassignedBarcodes,
    pub total_rows: usize, // 数据行数（不含表头）
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BarcodeIndexer;

impl BarcodeIndexer {
    /// 构建倒排索引
    ///
    /// # 参数
    /// - rows: 原始行
    /// - diagnostics: 诊断收集器（冲突/提升事件写入此处）
    ///
    /// # 返回
    /// - Ok(BarcodeIndex)
    /// - Err(MalformedRow): 某行列数不等于 2
    pub fn build<I>(&self, rows: I, diagnostics: &mut Diagnostics) -> ImportResult<BarcodeIndex>
    where
        I: IntoIterator<Item = RawRow>,
    {
        let mut ledger = AssignmentLedger::new();
        let mut result = BarcodeIndex::default();

        for row in rows.into_iter().skip(1) {
            let (barcode, order_id) = row.expect_pair()?;
            let assignment = BarcodeAssignment::from_fields(barcode, order_id, row.line);
            result.total_rows += 1;

            if let Some(held_by) = ledger.holder(&assignment.barcode) {
                diagnostics.push(DiagnosticEvent::BarcodeConflict {
                    row_number: assignment.row_number,
                    barcode: assignment.barcode,
                    held_by: held_by.to_string(),
                    attempted: assignment.order_id,
                });
                continue;
            }

            match assignment.order_id {
                None => {
                    result.unassigned.push(assignment.barcode);
                }
                Some(order_id) => {
                    if result.unassigned.remove(&assignment.barcode) {
                        diagnostics.push(DiagnosticEvent::UnassignedPromoted {
                            row_number: assignment.row_number,
                            barcode: assignment.barcode.clone(),
                            order_id: order_id.clone(),
                        });
                    }
                    ledger.record(&assignment.barcode, &order_id);
                    result.index.append(&order_id, assignment.barcode);
                }
            }
        }

        debug!(
            total_rows = result.total_rows,
            orders = result.index.len(),
            assigned = ledger.len(),
            unassigned = result.unassigned.len(),
            "倒排索引构建完成"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DiagnosticLevel;
    use crate::importer::error::ImportError;
    use crate::importer::importer_trait::number_rows;

    fn build(rows: Vec<Vec<&str>>) -> (BarcodeIndex, Diagnostics) {
        let mut diagnostics = Diagnostics::new();
        let result = BarcodeIndexer
            .build(number_rows(rows), &mut diagnostics)
            .unwrap();
        (result, diagnostics)
    }

    #[test]
    fn test_build_basic_index() {
        let (result, diagnostics) = build(vec![
            vec!["barcode", "order_id"],
            vec!["11111111111", "1"],
            vec!["11111111112", "2"],
            vec!["11111111113", ""],
        ]);

        assert_eq!(
            result.index.barcodes_for("1"),
            Some(&["11111111111".to_string()][..])
        );
        assert_eq!(
            result.index.barcodes_for("2"),
            Some(&["11111111112".to_string()][..])
        );
        assert_eq!(result.unassigned.as_slice(), &["11111111113".to_string()]);
        assert_eq!(result.total_rows, 3);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_multiple_barcodes_keep_order() {
        let (result, _) = build(vec![
            vec!["barcode", "order_id"],
            vec!["B3", "1"],
            vec!["B1", "1"],
            vec!["B2", "1"],
        ]);

        assert_eq!(
            result.index.barcodes_for("1"),
            Some(&["B3".to_string(), "B1".to_string(), "B2".to_string()][..])
        );
    }

    #[test]
    fn test_conflict_first_assignment_wins() {
        let (result, diagnostics) = build(vec![
            vec!["barcode", "order_id"],
            vec!["11111111111", "1"],
            vec!["11111111111", "2"],
        ]);

        assert_eq!(
            result.index.barcodes_for("1"),
            Some(&["11111111111".to_string()][..])
        );
        assert!(!result.index.contains_order("2"));
        assert!(result.unassigned.is_empty());

        let conflicts: Vec<_> = diagnostics.conflicts().collect();
        assert_eq!(conflicts.len(), 1);
        assert_eq!(
            conflicts[0],
            &DiagnosticEvent::BarcodeConflict {
                row_number: 3,
                barcode: "11111111111".to_string(),
                held_by: "1".to_string(),
                attempted: Some("2".to_string()),
            }
        );
    }

    #[test]
    fn test_conflict_with_empty_order_not_unassigned() {
        // 已分配条码再次出现且 order_id 为空：丢弃，不进入未分配列表
        let (result, diagnostics) = build(vec![
            vec!["barcode", "order_id"],
            vec!["11111111111", "1"],
            vec!["11111111111", ""],
        ]);

        assert!(result.unassigned.is_empty());
        assert_eq!(diagnostics.count_level(DiagnosticLevel::Error), 1);
    }

    #[test]
    fn test_same_order_reassignment_rejected() {
        let (result, diagnostics) = build(vec![
            vec!["barcode", "order_id"],
            vec!["11111111111", "1"],
            vec!["11111111111", "1"],
        ]);

        assert_eq!(result.index.total_barcodes(), 1);
        assert_eq!(diagnostics.conflicts().count(), 1);
    }

    #[test]
    fn test_unassigned_then_assigned_is_promoted() {
        let (result, diagnostics) = build(vec![
            vec!["barcode", "order_id"],
            vec!["11111111113", ""],
            vec!["11111111113", "3"],
        ]);

        assert!(result.index.contains_barcode("11111111113"));
        assert!(!result.unassigned.contains("11111111113"));
        assert_eq!(diagnostics.count_level(DiagnosticLevel::Info), 1);
    }

    #[test]
    fn test_repeated_unassigned_listed_once() {
        let (result, diagnostics) = build(vec![
            vec!["barcode", "order_id"],
            vec!["11111111113", ""],
            vec!["11111111113", ""],
        ]);

        assert_eq!(result.unassigned.len(), 1);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_no_barcode_in_both_places() {
        let (result, _) = build(vec![
            vec!["barcode", "order_id"],
            vec!["A", ""],
            vec!["B", "1"],
            vec!["A", "2"],
            vec!["B", ""],
            vec!["C", ""],
            vec!["C", "1"],
            vec!["C", "2"],
        ]);

        for barcode in result.unassigned.iter() {
            assert!(!result.index.contains_barcode(barcode));
        }
        assert!(result.unassigned.is_empty());
        assert_eq!(result.index.total_barcodes(), 3);
    }

    #[test]
    fn test_build_is_idempotent() {
        let rows = vec![
            vec!["barcode", "order_id"],
            vec!["11111111111", "1"],
            vec!["11111111111", "2"],
            vec!["11111111113", ""],
        ];

        let (first, first_diag) = build(rows.clone());
        let (second, second_diag) = build(rows);

        assert_eq!(first, second);
        assert_eq!(first_diag, second_diag);
    }

    #[test]
    fn test_malformed_row_aborts() {
        let mut diagnostics = Diagnostics::new();
        let rows = number_rows(vec![
            vec!["barcode", "order_id"],
            vec!["11111111111", "1", "extra"],
        ]);

        let err = BarcodeIndexer.build(rows, &mut diagnostics).unwrap_err();
        assert!(matches!(err, ImportError::MalformedRow { row: 2, .. }));
    }
}

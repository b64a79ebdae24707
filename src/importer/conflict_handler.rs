// ==========================================
// 订单条码报表 - 条码分配冲突处理
// ==========================================
// 策略: 先到先得（first-wins）
// 职责: 记录条码归属，检测重复分配
// ==========================================

use std::collections::HashMap;

// ==========================================
// AssignmentLedger - 条码归属台账
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct AssignmentLedger {
    owners: HashMap<String, String>, // barcode → order_id
}

impl AssignmentLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// 查询条码当前归属订单
    ///
    /// # 返回
    /// - Some(order_id): 条码已被分配，新的分配应被拒绝
    /// - None: 条码尚未分配
    pub fn holder(&self, barcode: &str) -> Option<&str> {
        self.owners.get(barcode).map(String::as_str)
    }

    /// 登记分配；已登记的条码保持原归属
    pub fn record(&mut self, barcode: &str, order_id: &str) {
        self.owners
            .entry(barcode.to_string())
            .or_insert_with(|| order_id.to_string());
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

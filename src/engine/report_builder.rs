// ==========================================
// 订单条码报表 - 报表构建器
// ==========================================
// 输入: 订单列表 + 倒排索引
// 输出: 每个有条码的订单一行，保持订单输入顺序
// 规则: 索引中无条目的订单不输出，记录 OrderWithoutBarcodes
// ==========================================

use crate::domain::{DiagnosticEvent, Diagnostics, InvertedIndex, OrderRecord};
use serde::{Deserialize, Serialize};

// ==========================================
// ReportLine - 报表行
// ==========================================
// 格式: customer_id,order_id,barcode1,barcode2,...
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLine {
    pub customer_id: String,
    pub order_id: String,
    pub barcodes: Vec<String>,
}

impl ReportLine {
    /// 按输出列顺序展开字段
    pub fn fields(&self) -> Vec<&str> {
        let mut fields = Vec::with_capacity(self.barcodes.len() + 2);
        fields.push(self.customer_id.as_str());
        fields.push(self.order_id.as_str());
        fields.extend(self.barcodes.iter().map(String::as_str));
        fields
    }
}

// ==========================================
// ReportBuilder - 报表构建器
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportBuilder;

impl ReportBuilder {
    pub fn new() -> Self {
        Self
    }

    /// 关联订单与倒排索引
    ///
    /// # 参数
    /// - orders: 订单列表（按输入顺序）
    /// - index: 倒排索引
    /// - diagnostics: 诊断收集器
    ///
    /// # 返回
    /// - Vec<ReportLine>: 报表行
    pub fn build(
        &self,
        orders: &[OrderRecord],
        index: &InvertedIndex,
        diagnostics: &mut Diagnostics,
    ) -> Vec<ReportLine> {
        let mut lines = Vec::with_capacity(orders.len());

        for order in orders {
            match index.barcodes_for(&order.order_id) {
                Some(barcodes) => lines.push(ReportLine {
                    customer_id: order.customer_id.clone(),
                    order_id: order.order_id.clone(),
                    barcodes: barcodes.to_vec(),
                }),
                None => diagnostics.push(DiagnosticEvent::OrderWithoutBarcodes {
                    row_number: order.row_number,
                    order_id: order.order_id.clone(),
                    customer_id: order.customer_id.clone(),
                }),
            }
        }

        lines
    }
}

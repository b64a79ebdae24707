// ==========================================
// 订单条码报表 - 订单领域模型
// ==========================================
// 输入: orders 文件（列顺序: order_id, customer_id）
// 约定: order_id 假定唯一，但不强制
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// OrderRecord - 订单记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_id: String,    // 订单号
    pub customer_id: String, // 客户号
    pub row_number: usize,   // 源文件行号（表头为第 1 行）
}

impl OrderRecord {
    pub fn new(order_id: impl Into<String>, customer_id: impl Into<String>, row_number: usize) -> Self {
        Self {
            order_id: order_id.into(),
            customer_id: customer_id.into(),
            row_number,
        }
    }
}

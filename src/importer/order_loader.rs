// ==========================================
// 订单条码报表 - 订单加载器
// ==========================================
// 输入: 原始行（第一行为表头，无条件丢弃）
// 输出: 按输入顺序排列的 OrderRecord
// ==========================================

use crate::domain::OrderRecord;
use crate::importer::error::ImportResult;
use crate::importer::importer_trait::RawRow;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct OrderLoader;

impl OrderLoader {
    /// 解析订单行
    ///
    /// # 返回
    /// - Ok(Vec<OrderRecord>): 订单列表（不去重）
    /// - Err(MalformedRow): 某行列数不等于 2
    pub fn load<I>(&self, rows: I) -> ImportResult<Vec<OrderRecord>>
    where
        I: IntoIterator<Item = RawRow>,
    {
        let orders = rows
            .into_iter()
            .skip(1)
            .map(|row| -> ImportResult<OrderRecord> {
                let (order_id, customer_id) = row.expect_pair()?;
                Ok(OrderRecord::new(order_id, customer_id, row.line))
            })
            .collect::<ImportResult<Vec<_>>>()?;

        debug!(total_orders = orders.len(), "订单加载完成");
        Ok(orders)
    }
}

// ==========================================
// 订单条码报表 - 条码领域模型
// ==========================================
// 输入: barcodes 文件（列顺序: barcode, order_id）
// 红线: 一个条码只能出现在一处
//       （唯一订单 或 未分配列表，二者不可兼有）
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

// ==========================================
// BarcodeAssignment - 条码分配记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarcodeAssignment {
    pub barcode: String,          // 条码（自然主键）
    pub order_id: Option<String>, // 订单号（空字符串 → None，表示未分配）
    pub row_number: usize,        // 源文件行号（表头为第 1 行）
}

impl BarcodeAssignment {
    /// 由原始字段构造，空 order_id 视为未分配
    pub fn from_fields(barcode: &str, order_id: &str, row_number: usize) -> Self {
        Self {
            barcode: barcode.to_string(),
            order_id: if order_id.is_empty() {
                None
            } else {
                Some(order_id.to_string())
            },
            row_number,
        }
    }
}

// ==========================================
// InvertedIndex - 倒排索引 (order_id → barcodes)
// ==========================================
// 每个订单内保持插入顺序；订单按首次出现顺序遍历
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvertedIndex {
    entries: HashMap<String, Vec<String>>,
    order_ids: Vec<String>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// 将条码追加到订单条目末尾（条目不存在时创建）
    pub fn append(&mut self, order_id: &str, barcode: impl Into<String>) {
        match self.entries.get_mut(order_id) {
            Some(barcodes) => barcodes.push(barcode.into()),
            None => {
                self.order_ids.push(order_id.to_string());
                self.entries
                    .insert(order_id.to_string(), vec![barcode.into()]);
            }
        }
    }

    /// 查询订单的条码列表
    ///
    /// # 返回
    /// - Some(&[String]): 按分配顺序排列的条码
    /// - None: 该订单在索引中无条目
    pub fn barcodes_for(&self, order_id: &str) -> Option<&[String]> {
        self.entries.get(order_id).map(Vec::as_slice)
    }

    pub fn contains_order(&self, order_id: &str) -> bool {
        self.entries.contains_key(order_id)
    }

    pub fn contains_barcode(&self, barcode: &str) -> bool {
        self.entries
            .values()
            .any(|barcodes| barcodes.iter().any(|b| b == barcode))
    }

    /// 订单条目数
    pub fn len(&self) -> usize {
        self.order_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order_ids.is_empty()
    }

    /// 已分配条码总数
    pub fn total_barcodes(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// 按订单首次出现顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.order_ids.iter().filter_map(move |order_id| {
            self.entries
                .get(order_id)
                .map(|barcodes| (order_id.as_str(), barcodes.as_slice()))
        })
    }
}

// ==========================================
// UnassignedBarcodes - 未分配条码列表
// ==========================================
// 保持出现顺序，同一条码只列出一次
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnassignedBarcodes {
    barcodes: Vec<String>,
    seen: HashSet<String>,
}

impl UnassignedBarcodes {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加条码
    ///
    /// # 返回
    /// - true: 新增
    /// - false: 已在列表中
    pub fn push(&mut self, barcode: impl Into<String>) -> bool {
        let barcode = barcode.into();
        if !self.seen.insert(barcode.clone()) {
            return false;
        }
        self.barcodes.push(barcode);
        true
    }

    /// 移除条码（条码后续被分配到订单时调用）
    pub fn remove(&mut self, barcode: &str) -> bool {
        if !self.seen.remove(barcode) {
            return false;
        }
        self.barcodes.retain(|b| b != barcode);
        true
    }

    pub fn contains(&self, barcode: &str) -> bool {
        self.seen.contains(barcode)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.barcodes
    }

    pub fn len(&self) -> usize {
        self.barcodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.barcodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.barcodes.iter()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.barcodes
    }
}

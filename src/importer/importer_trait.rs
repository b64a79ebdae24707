// ==========================================
// 订单条码报表 - 导入接口
// ==========================================
// 职责: 定义原始行结构与文件解析接口（不包含实现）
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use std::path::Path;

// ==========================================
// RawRow - 原始行
// ==========================================
// 用途: 文件解析层与加载器之间的边界结构
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub line: usize,         // 源文件行号（1 起）
    pub fields: Vec<String>, // 原样字段（不做 TRIM）
}

impl RawRow {
    pub fn new(line: usize, fields: Vec<String>) -> Self {
        Self { line, fields }
    }

    /// 取出两列字段
    ///
    /// # 返回
    /// - Ok((第一列, 第二列))
    /// - Err(MalformedRow): 列数不等于 2
    pub fn expect_pair(&self) -> ImportResult<(&str, &str)> {
        match self.fields.as_slice() {
            [first, second] => Ok((first.as_str(), second.as_str())),
            _ => Err(ImportError::MalformedRow {
                row: self.line,
                expected: 2,
                actual: self.fields.len(),
            }),
        }
    }
}

/// 将内存中的行序列按出现顺序编号（第一行为第 1 行）
pub fn number_rows<I, R, S>(rows: I) -> Vec<RawRow>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = S>,
    S: Into<String>,
{
    rows.into_iter()
        .enumerate()
        .map(|(idx, row)| RawRow::new(idx + 1, row.into_iter().map(Into::into).collect()))
        .collect()
}

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口
// 实现者: CsvParser
pub trait FileParser: Send + Sync {
    /// 解析文件为原始行（含表头行，由加载器丢弃）
    ///
    /// # 参数
    /// - file_path: 文件路径
    ///
    /// # 返回
    /// - Ok(Vec<RawRow>): 行记录列表
    /// - Err: 文件不存在、读取错误、CSV 格式错误
    fn parse_rows(&self, file_path: &Path) -> ImportResult<Vec<RawRow>>;
}

// ==========================================
// 订单条码报表 - 文件解析器实现
// ==========================================
// 方言: 逗号分隔 / 双引号包裹（可配置）
// 说明: 不识别表头（由加载器丢弃第一行），
//       不校验列数（由加载器报告 MalformedRow）
// ==========================================

use crate::config::ReportConfig;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::{FileParser, RawRow};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

// ==========================================
// CSV Parser 实现
// ==========================================
#[derive(Debug, Clone, Copy)]
pub struct CsvParser {
    delimiter: u8,
    quote: u8,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
        }
    }
}

impl CsvParser {
    pub fn new(delimiter: u8, quote: u8) -> Self {
        Self { delimiter, quote }
    }

    /// 按配置构造（配置需已通过 validate）
    pub fn from_config(config: &ReportConfig) -> ImportResult<Self> {
        Ok(Self::new(config.delimiter_byte()?, config.quote_byte()?))
    }

    /// 从任意 Reader 解析原始行
    ///
    /// 行号为物理行号：空行与引号内换行都计入
    pub fn parse_reader<R: Read>(&self, mut source: R) -> ImportResult<Vec<RawRow>> {
        let mut input = Vec::new();
        source.read_to_end(&mut input)?;
        let line_index = LineIndex::new(&input);

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true) // 允许行长度不一致
            .delimiter(self.delimiter)
            .quote(self.quote)
            .from_reader(input.as_slice());

        let mut rows = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let record = result?;
            let line = record
                .position()
                .map(|p| line_index.line_of_record(p.byte() as usize))
                .unwrap_or(idx + 1);
            rows.push(RawRow::new(
                line,
                record.iter().map(str::to_string).collect(),
            ));
        }

        Ok(rows)
    }
}

// ==========================================
// LineIndex - 字节偏移 → 物理行号
// ==========================================
// csv 读取器记录的位置在跳过空行之前，
// 需先越过行终止符再换算行号
struct LineIndex<'a> {
    input: &'a [u8],
    newlines: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    fn new(input: &'a [u8]) -> Self {
        let newlines = input
            .iter()
            .enumerate()
            .filter(|(_, b)| **b == b'\n')
            .map(|(offset, _)| offset)
            .collect();
        Self { input, newlines }
    }

    fn line_of_record(&self, record_start: usize) -> usize {
        let start = self.input[record_start.min(self.input.len())..]
            .iter()
            .position(|b| *b != b'\n' && *b != b'\r')
            .map(|skip| record_start + skip)
            .unwrap_or(self.input.len());
        self.newlines.partition_point(|nl| *nl < start) + 1
    }
}

impl FileParser for CsvParser {
    fn parse_rows(&self, file_path: &Path) -> ImportResult<Vec<RawRow>> {
        // 检查文件存在
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        let file = File::open(file_path).map_err(|e| {
            ImportError::FileReadError(format!("{}: {}", file_path.display(), e))
        })?;
        self.parse_reader(file)
    }
}

// ==========================================
// 订单条码报表 - 报表写出
// ==========================================
// 格式: 无表头 / 不加引号 / 每行以 \n 结尾
// ==========================================

use crate::engine::report_builder::ReportLine;
use crate::importer::error::{ImportError, ImportResult};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy)]
pub struct ReportWriter {
    separator: u8,
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self { separator: b',' }
    }
}

impl ReportWriter {
    pub fn new(separator: u8) -> Self {
        Self { separator }
    }

    /// 写出到任意 Writer
    ///
    /// # 返回
    /// - Ok(usize): 写出的行数
    pub fn write_to<W: Write>(&self, lines: &[ReportLine], writer: W) -> ImportResult<usize> {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .flexible(true) // 每行条码数不同
            .delimiter(self.separator)
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(writer);

        for line in lines {
            writer
                .write_record(line.fields())
                .map_err(|e| ImportError::FileWriteError(e.to_string()))?;
        }
        writer
            .flush()
            .map_err(|e| ImportError::FileWriteError(e.to_string()))?;

        Ok(lines.len())
    }

    /// 写出到文件（覆盖已有文件）
    pub fn write_file(&self, lines: &[ReportLine], output_path: &Path) -> ImportResult<usize> {
        let file = File::create(output_path).map_err(|e| {
            ImportError::FileWriteError(format!("{}: {}", output_path.display(), e))
        })?;
        self.write_to(lines, file)
    }
}

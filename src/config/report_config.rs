// ==========================================
// 订单条码报表 - 运行配置
// ==========================================
// 来源: 默认值 → JSON 配置文件 → 命令行参数（后者覆盖前者）
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// ===== 默认值 =====
pub const DEFAULT_ORDERS_PATH: &str = "orders.csv";
pub const DEFAULT_BARCODES_PATH: &str = "barcodes.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "output.csv";

// ==========================================
// ReportConfig - 运行配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub orders_path: PathBuf,   // 订单文件
    pub barcodes_path: PathBuf, // 条码文件
    pub output_path: PathBuf,   // 报表输出文件
    pub delimiter: char,        // 输入分隔符
    pub quote: char,            // 输入引号
    pub output_separator: char, // 输出分隔符
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            orders_path: PathBuf::from(DEFAULT_ORDERS_PATH),
            barcodes_path: PathBuf::from(DEFAULT_BARCODES_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            delimiter: ',',
            quote: '"',
            output_separator: ',',
        }
    }
}

impl ReportConfig {
    /// 从 JSON 文件加载（缺省字段取默认值）
    pub fn from_json_file(path: &Path) -> ImportResult<Self> {
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> ImportResult<Self> {
        serde_json::from_str(raw).map_err(|e| ImportError::ConfigError(e.to_string()))
    }

    /// 校验分隔符配置
    pub fn validate(&self) -> ImportResult<()> {
        self.delimiter_byte()?;
        self.quote_byte()?;
        self.output_separator_byte()?;

        if self.delimiter == self.quote {
            return Err(ImportError::ConfigError(format!(
                "分隔符与引号不能相同: {:?}",
                self.delimiter
            )));
        }
        Ok(())
    }

    pub fn delimiter_byte(&self) -> ImportResult<u8> {
        ascii_byte("delimiter", self.delimiter)
    }

    pub fn quote_byte(&self) -> ImportResult<u8> {
        ascii_byte("quote", self.quote)
    }

    pub fn output_separator_byte(&self) -> ImportResult<u8> {
        ascii_byte("output_separator", self.output_separator)
    }
}

fn ascii_byte(key: &str, value: char) -> ImportResult<u8> {
    if value.is_ascii() {
        Ok(value as u8)
    } else {
        Err(ImportError::ConfigError(format!(
            "{} 必须为单个 ASCII 字符，实际 {:?}",
            key, value
        )))
    }
}

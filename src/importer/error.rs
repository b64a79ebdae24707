// ==========================================
// 订单条码报表 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 这里只收录致命错误；条码冲突/无条码订单
//       属于可恢复事件，走 Diagnostics 收集器
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("文件写入失败: {0}")]
    FileWriteError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    // ===== 行结构错误 =====
    #[error("行格式错误 (行 {row}): 期望 {expected} 列，实际 {actual} 列")]
    MalformedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    // ===== 配置错误 =====
    #[error("配置错误: {0}")]
    ConfigError(String),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;

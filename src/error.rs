use thiserror::Error;

/// 应用程序错误类型
///
/// 提取、筛选、组卷本身不会失败；错误只来自存储、文件、JSON 和配置这些边界。
#[derive(Debug, Error)]
pub enum AppError {
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 存储端口错误
    #[error("存储错误: {0}")]
    Storage(#[from] StorageError),
    /// 数据解析错误
    #[error("解析错误: {0}")]
    Parse(#[from] ParseError),
    /// 业务逻辑错误
    #[error("业务错误: {0}")]
    Business(#[from] BusinessError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 删除文件失败
    #[error("删除文件失败 ({path}): {source}")]
    DeleteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// 存储端口错误
#[derive(Debug, Error)]
pub enum StorageError {
    /// 键不合法（为空或包含路径分隔符）
    #[error("存储键不合法: '{key}'")]
    InvalidKey { key: String },
    /// 存储后端不可用
    #[error("存储不可用: {reason}")]
    Unavailable { reason: String },
}

/// 数据解析错误
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON 解析或序列化失败
    #[error("JSON解析失败: {0}")]
    Json(#[from] serde_json::Error),
    /// TOML 解析失败
    #[error("TOML解析失败: {0}")]
    Toml(#[from] toml::de::Error),
}

/// 业务逻辑错误
#[derive(Debug, Error)]
pub enum BusinessError {
    /// 题库不存在
    #[error("题库不存在: {bank_id}")]
    BankNotFound { bank_id: String },
    /// 题库名称为空
    #[error("题库名称不能为空")]
    EmptyBankName,
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
}

// ========== 从常见错误类型转换 ==========

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(ParseError::Json(err))
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::Parse(ParseError::Toml(err))
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建题库不存在错误
    pub fn bank_not_found(bank_id: impl Into<String>) -> Self {
        AppError::Business(BusinessError::BankNotFound {
            bank_id: bank_id.into(),
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AppError::bank_not_found("bank-1");
        assert_eq!(err.to_string(), "业务错误: 题库不存在: bank-1");

        let err: AppError = serde_json::from_str::<u32>("x").unwrap_err().into();
        assert!(matches!(err, AppError::Parse(ParseError::Json(_))));
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error as _;
        let err = AppError::file_write_failed(
            "out.md",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.source().is_some());
    }
}

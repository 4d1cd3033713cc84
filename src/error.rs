//! 统一错误处理
//!
//! 提供翻译工具的结构化错误类型和结果别名

use thiserror::Error;

/// 翻译工具错误类型
#[derive(Error, Debug)]
pub enum TranslateError {
    /// 网络错误（连接失败、超时等）
    #[error("network error: {0}")]
    Network(String),

    /// 翻译服务返回了非成功状态码
    #[error("translation service returned status {0}")]
    ServiceStatus(u16),

    /// 响应解析错误
    #[error("failed to parse service response: {0}")]
    Parse(String),

    /// 缓存读写错误
    #[error("cache error: {0}")]
    Cache(String),

    /// 配置错误
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for TranslateError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            TranslateError::Network(format!("request timed out: {}", error))
        } else {
            TranslateError::Network(error.to_string())
        }
    }
}

impl From<serde_json::Error> for TranslateError {
    fn from(error: serde_json::Error) -> Self {
        TranslateError::Parse(error.to_string())
    }
}

impl From<std::io::Error> for TranslateError {
    fn from(error: std::io::Error) -> Self {
        TranslateError::Cache(error.to_string())
    }
}

impl From<config::ConfigError> for TranslateError {
    fn from(error: config::ConfigError) -> Self {
        TranslateError::Config(error.to_string())
    }
}

/// 错误结果类型别名
pub type TranslateResult<T> = Result<T, TranslateError>;

//! 统一错误处理
//!
//! 所有错误都是调用方契约错误，同步返回给直接调用者，不做重试或部分结果处理。
//! `FrameResult<T>` 提供统一的返回类型，简化错误传播

use thiserror::Error;

/// 统一的错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FrameError {
    /// 参数非法，例如格式错误的 `field:order` 排序串
    #[error("参数错误: {0}")]
    InvalidArgument(String),

    /// 几何类型不受支持，携带实际遇到的类型名
    #[error("Unknown geometry type '{0}'")]
    UnsupportedType(String),

    #[error("列不存在: {0}")]
    ColumnNotFound(String),

    #[error("配置错误: {0}")]
    Config(String),
}

/// 统一的结果类型
pub type FrameResult<T> = Result<T, FrameError>;

impl FrameError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        FrameError::InvalidArgument(message.into())
    }

    pub fn unsupported_type(type_name: impl Into<String>) -> Self {
        FrameError::UnsupportedType(type_name.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_type_names_type() {
        let err = FrameError::unsupported_type("string");
        assert_eq!(err.to_string(), "Unknown geometry type 'string'");
    }

    #[test]
    fn test_invalid_argument_message() {
        let err = FrameError::invalid_argument("Expected valid string");
        assert!(err.to_string().contains("Expected valid string"));
    }
}

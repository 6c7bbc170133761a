//! 清洗器错误类型

use thiserror::Error;

/// 清洗器错误
///
/// 除 German 引擎缺失外，所有基础变换都不会失败
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CleanerError {
    /// 可选引擎在启动时未绑定
    #[error("missing dependency: {0}")]
    MissingDependency(String),
    /// 按名称选择清洗器时名称不存在
    #[error("unknown cleaner: {0}")]
    UnknownCleaner(String),
}

pub type Result<T> = std::result::Result<T, CleanerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CleanerError::MissingDependency("enable the `german` feature".to_string());
        assert_eq!(
            err.to_string(),
            "missing dependency: enable the `german` feature"
        );

        let err = CleanerError::UnknownCleaner("french".to_string());
        assert_eq!(err.to_string(), "unknown cleaner: french");
    }
}

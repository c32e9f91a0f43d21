//! 领域层统一错误定义
//!
//! 聚焦校验、事件分发、序列化与仓储等最小必要集合，
//! 便于在各实现层统一转换为 `DomainError`。
//!
use thiserror::Error;

/// 统一错误类型（基础库最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 领域规则 ---
    /// 实体/值对象校验失败，消息即为业务规则原文
    #[error("{reason}")]
    Validation { reason: String },

    // --- 事件系统 ---
    #[error("event handler error: handler={handler}, reason={reason}")]
    EventHandler { handler: String, reason: String },

    // --- 序列化 ---
    #[error("serialization error: {source}")]
    Serde {
        #[from]
        source: serde_json::Error,
    },

    // --- 仓储/持久化 ---
    #[error("repository error: {reason}")]
    Repository { reason: String },
    #[error("not found: {reason}")]
    NotFound { reason: String },
}

impl DomainError {
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }

    pub fn event_handler(handler: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::EventHandler {
            handler: handler.into(),
            reason: reason.into(),
        }
    }

    pub fn repository(reason: impl Into<String>) -> Self {
        Self::Repository {
            reason: reason.into(),
        }
    }

    pub fn not_found(reason: impl Into<String>) -> Self {
        Self::NotFound {
            reason: reason.into(),
        }
    }
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_displays_rule_text_verbatim() {
        let err = DomainError::validation("Id is required");
        assert_eq!(err.to_string(), "Id is required");
    }

    #[test]
    fn event_handler_error_names_the_handler() {
        let err = DomainError::event_handler("audit", "disk full");
        assert_eq!(
            err.to_string(),
            "event handler error: handler=audit, reason=disk full"
        );
    }

    #[test]
    fn serde_errors_convert_with_question_mark() {
        fn parse() -> DomainResult<serde_json::Value> {
            Ok(serde_json::from_str("{not json")?)
        }

        match parse().unwrap_err() {
            DomainError::Serde { .. } => {}
            other => panic!("unexpected {other:?}"),
        }
    }
}

//! 演示程序配置
//!
//! 所有配置来自环境变量，启动时可选读取 `.env`：
//! - `RUST_LOG`：日志过滤表达式，默认 `info`；
//! - `LOG_FORMAT`：`plain` 或 `json`，默认 `plain`。
//!
use anyhow::{Result, bail};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            other => bail!("unsupported LOG_FORMAT: {other} (expected plain|json)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub log_filter: String,
    pub log_format: LogFormat,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            log_format: LogFormat::Plain,
        }
    }
}

impl DemoConfig {
    /// 读取 `.env`（若存在）后从进程环境加载
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let log_filter = lookup("RUST_LOG")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.log_filter);
        let log_format = match lookup("LOG_FORMAT") {
            Some(raw) => raw.parse()?,
            None => defaults.log_format,
        };

        Ok(Self {
            log_filter,
            log_format,
        })
    }
}

//! 日志初始化
//!
//! TUI 占用 stdout，日志写入 ~/.todo-rs/logs/todo.log。
//! 过滤级别取自 `TODO_LOG`（默认 info）。

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{Result, TodoError};
use crate::storage;

/// 日志过滤环境变量
pub const LOG_ENV: &str = "TODO_LOG";

const LOG_FILE: &str = "todo.log";

/// 初始化文件日志；失败时调用方可忽略，程序照常运行
pub fn init() -> Result<()> {
    let path = storage::ensure_log_dir()?.join(LOG_FILE);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| TodoError::config(format!("logger init failed: {}", e)))
}

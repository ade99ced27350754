//! 日志初始化
//!
//! 终端被 TUI 占用，日志写入 ~/.local/share/tabsplit/tabsplit.log

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

/// 获取数据目录路径 (~/.local/share/tabsplit/)
pub fn data_dir() -> Result<PathBuf> {
    let dir = dirs::data_dir()
        .ok_or(Error::MissingDir("数据"))?
        .join("tabsplit");

    fs::create_dir_all(&dir).map_err(|source| Error::Io {
        path: dir.clone(),
        source,
    })?;

    Ok(dir)
}

/// 安装全局日志订阅者，返回日志文件路径
///
/// RUST_LOG 优先于配置中的 `log_filter`。
pub fn init(default_filter: &str) -> Result<PathBuf> {
    let path = data_dir()?.join("tabsplit.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|e| Error::Logging(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))?;

    Ok(path)
}

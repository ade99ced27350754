//! 错误类型
//!
//! - `Error`: 启动阶段的致命错误（目录、配置、日志）
//! - `EntryError`: 表单校验结果，只会让操作变为空操作

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// 启动阶段的致命错误
#[derive(Debug, Error)]
pub enum Error {
    #[error("无法获取用户{0}目录")]
    MissingDir(&'static str),

    #[error("读写 {path} 失败: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("配置文件 {path} 格式错误: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("配置中的好友列表不能为空")]
    EmptyRoster,

    #[error("配置中第 {index} 个好友缺少 {field}")]
    InvalidSeed { index: usize, field: &'static str },

    #[error("日志初始化失败: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// 表单校验失败的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("请输入好友名字")]
    MissingName,
    #[error("请输入头像地址")]
    MissingImage,
    #[error("请输入账单金额")]
    MissingBill,
    #[error("请输入你的花费")]
    MissingShare,
    #[error("金额过大")]
    AmountTooLarge,
    #[error("好友不存在")]
    UnknownFriend,
}

//! 配置文件加载 (~/.config/tabsplit/config.toml)
//!
//! 配置只在启动时读取，好友余额不会写回磁盘。

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{Money, Roster};

/// 覆盖配置文件路径的环境变量
pub const CONFIG_ENV: &str = "TABSPLIT_CONFIG";

pub const DEFAULT_IMAGE: &str = "https://i.pravatar.cc/48";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 添加好友表单中头像地址的默认值
    pub default_image: String,
    /// 未设置 RUST_LOG 时使用的日志过滤规则
    pub log_filter: String,
    pub friends: Vec<FriendSeed>,
}

/// 启动时的好友种子数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FriendSeed {
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub balance: Money,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_image: DEFAULT_IMAGE.to_string(),
            log_filter: "info".to_string(),
            friends: Roster::seeded()
                .iter()
                .map(|f| FriendSeed {
                    name: f.name().to_string(),
                    image: f.image().to_string(),
                    balance: f.balance(),
                })
                .collect(),
        }
    }
}

impl Config {
    /// 解析 TOML 文本并校验
    pub fn from_toml(content: &str, path: &Path) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.friends.is_empty() {
            return Err(Error::EmptyRoster);
        }
        for (index, seed) in self.friends.iter().enumerate() {
            if seed.name.trim().is_empty() {
                return Err(Error::InvalidSeed { index: index + 1, field: "name" });
            }
            if seed.image.trim().is_empty() {
                return Err(Error::InvalidSeed { index: index + 1, field: "image" });
            }
        }
        Ok(())
    }

    /// 根据种子数据构建好友列表
    pub fn roster(&self) -> Roster {
        let mut roster = Roster::new();
        for seed in &self.friends {
            roster.push_seed(seed.name.trim(), seed.image.trim(), seed.balance);
        }
        roster
    }
}

/// 配置文件路径：优先环境变量，否则为 ~/.config/tabsplit/config.toml
pub fn config_path() -> Result<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }
    let dir = dirs::config_dir().ok_or(Error::MissingDir("配置"))?;
    Ok(dir.join("tabsplit").join("config.toml"))
}

/// 从文件加载配置，文件不存在时使用默认值
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Config::from_toml(&content, path)
}

//! tabsplit：在终端里记录和好友之间的分账余额
//!
//! 好友列表只保存在内存中，退出即丢失；配置文件只提供启动时的种子数据。

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod session;
pub mod split;
pub mod ui;

pub use config::{Config, load_config};
pub use error::{EntryError, Error, Result};
pub use models::{BalanceStatus, Friend, FriendId, Money, Roster, classify};
pub use session::{Session, SessionMode};
pub use split::{Payer, compute_split};

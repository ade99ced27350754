//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关类型

use std::collections::VecDeque;

use chrono::{DateTime, Local};

use super::forms::{AddFriendForm, SplitForm};
use crate::config::Config;
use crate::models::{Friend, FriendId, Money};
use crate::session::{Session, SessionMode};
use crate::split::Payer;

/// 最多保留的分摊记录条数
pub const ACTIVITY_LIMIT: usize = 50;

/// 一次已提交的分摊记录（仅保存在内存中）
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub at: DateTime<Local>,
    pub friend: String,
    pub payer: Payer,
    pub delta: Money,
}

/// 应用状态
pub struct App {
    pub session: Session,
    pub cursor: usize, // 列表高亮位置，与选中无关
    pub add_form: AddFriendForm,
    pub split_form: SplitForm,
    pub split_target: Option<FriendId>, // 分摊表单对应的好友
    pub activity: VecDeque<Activity>, // 最新的在前
    pub message: Option<String>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: &Config) -> Self {
        Self {
            session: Session::new(config.roster()),
            cursor: 0,
            add_form: AddFriendForm::new(&config.default_image),
            split_form: SplitForm::default(),
            split_target: None,
            activity: VecDeque::with_capacity(ACTIVITY_LIMIT),
            message: None,
        }
    }

    pub fn mode(&self) -> SessionMode {
        self.session.mode()
    }

    /// 获取光标所在的好友
    pub fn friend_under_cursor(&self) -> Option<&Friend> {
        self.session.roster().get_index(self.cursor)
    }

    /// 记录一次分摊，超出上限时丢弃最旧的记录
    pub fn record_activity(&mut self, entry: Activity) {
        if self.activity.len() == ACTIVITY_LIMIT {
            self.activity.pop_back();
        }
        self.activity.push_front(entry);
    }

    /// 选中好友变化时重置分摊表单
    pub fn sync_split_form(&mut self) {
        let selected = self.session.selected_id();
        if selected != self.split_target {
            self.split_form = SplitForm::default();
            self.split_target = selected;
        }
    }
}

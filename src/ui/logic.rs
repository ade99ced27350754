//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和各种业务处理方法

use chrono::Local;
use tracing::debug;

use super::actions::Action;
use super::forms::AddField;
use super::state::{Activity, App};
use crate::error::EntryError;
use crate::session::SessionMode;

impl App {
    /// 核心逻辑分发
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::MoveCursorUp => self.move_up(),
            Action::MoveCursorDown => self.move_down(),

            Action::SelectFriend => self.select_under_cursor(),
            Action::ToggleAddForm => self.toggle_add_form(),

            Action::TogglePayer => self.split_form.toggle_payer(),
            Action::CloseSplit => self.close_split(),

            Action::Cancel => self.cancel(),

            Action::Submit => match self.mode() {
                SessionMode::AddingFriend => self.confirm_add_friend(),
                SessionMode::Splitting(_) => self.confirm_split(),
                SessionMode::Browsing => {}
            },

            Action::NextField => match self.mode() {
                SessionMode::AddingFriend => self.add_form.toggle_field(),
                SessionMode::Splitting(_) => self.split_form.next_field(),
                SessionMode::Browsing => {}
            },

            Action::Input(c) => match self.mode() {
                SessionMode::AddingFriend => {
                    self.add_form.push_char(c);
                }
                SessionMode::Splitting(_) => {
                    if !self.split_form.push_char(c) {
                        debug!(input = %c, "split input rejected");
                    }
                }
                SessionMode::Browsing => {}
            },

            Action::DeleteChar => match self.mode() {
                SessionMode::AddingFriend => self.add_form.pop_char(),
                SessionMode::Splitting(_) => self.split_form.pop_char(),
                SessionMode::Browsing => {}
            },
        }
        self.sync_split_form();
        false
    }

    // ============ 导航相关 ============

    /// 向上移动光标
    pub fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// 向下移动光标
    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.session.roster().len() {
            self.cursor += 1;
        }
    }

    // ============ 选中好友相关 ============

    /// 选中（或取消选中）光标所在的好友
    pub fn select_under_cursor(&mut self) {
        if let Some(id) = self.friend_under_cursor().map(|f| f.id()) {
            self.session.select_friend(id);
            self.message = None;
        }
    }

    /// 关闭分摊表单
    pub fn close_split(&mut self) {
        if let Some(id) = self.session.selected_id() {
            self.session.select_friend(id);
        }
    }

    /// 提交分摊
    pub fn confirm_split(&mut self) {
        let Some(friend) = self.session.selected_friend() else {
            return;
        };
        let id = friend.id();
        let name = friend.name().to_string();

        let delta = match self.split_form.delta() {
            Ok(delta) => delta,
            Err(err) => {
                debug!(%err, "split rejected");
                self.message = Some(err.to_string());
                return;
            }
        };

        match self.session.apply_balance_delta(id, delta) {
            Ok(_) => {
                self.record_activity(Activity {
                    at: Local::now(),
                    friend: name.clone(),
                    payer: self.split_form.payer,
                    delta,
                });
                self.message = Some(format!("已与 {name} 分摊账单"));
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    // ============ 添加好友相关 ============

    /// 打开或关闭添加表单
    pub fn toggle_add_form(&mut self) {
        if self.session.toggle_add_form() {
            self.add_form.reset();
        }
        self.message = None;
    }

    /// 确认添加好友
    pub fn confirm_add_friend(&mut self) {
        let result = self
            .session
            .add_friend(&self.add_form.name, &self.add_form.image);
        match result {
            Ok(_) => {
                self.message = Some(format!("已添加好友 {}", self.add_form.name.trim()));
                self.add_form.reset();
                self.cursor = self.session.roster().len() - 1;
            }
            Err(err) => {
                self.add_form.field = match err {
                    EntryError::MissingImage => AddField::Image,
                    _ => AddField::Name,
                };
                self.message = Some(err.to_string());
            }
        }
    }

    // ============ 通用操作 ============

    /// 取消当前操作
    pub fn cancel(&mut self) {
        self.session.close_add_form();
        self.message = None;
    }
}

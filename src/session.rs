//! 会话状态：好友列表 + 当前选中 + 添加表单开关
//!
//! 两个状态位互斥：打开添加表单会清除选中，选中好友会关闭添加表单。
//! 由每个状态转换各自保证，不存在 (表单打开, 已选中) 的组合。

use tracing::{debug, info};

use crate::error::EntryError;
use crate::models::{Friend, FriendId, Money, Roster};

/// 由两个状态位推导出的会话模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    Browsing,
    AddingFriend,
    Splitting(FriendId),
}

#[derive(Debug, Clone)]
pub struct Session {
    roster: Roster,
    selected: Option<FriendId>,
    add_form_open: bool,
}

impl Session {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            selected: None,
            add_form_open: false,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn selected_id(&self) -> Option<FriendId> {
        self.selected
    }

    pub fn selected_friend(&self) -> Option<&Friend> {
        self.selected.and_then(|id| self.roster.get(id))
    }

    pub fn is_add_form_open(&self) -> bool {
        self.add_form_open
    }

    pub fn mode(&self) -> SessionMode {
        match (self.add_form_open, self.selected) {
            (_, Some(id)) => SessionMode::Splitting(id),
            (true, None) => SessionMode::AddingFriend,
            (false, None) => SessionMode::Browsing,
        }
    }

    // ============ 添加好友 ============

    /// 打开添加表单，同时清除选中
    pub fn open_add_form(&mut self) {
        self.add_form_open = true;
        self.selected = None;
    }

    pub fn close_add_form(&mut self) {
        self.add_form_open = false;
    }

    /// 切换添加表单，返回切换后的状态
    pub fn toggle_add_form(&mut self) -> bool {
        if self.add_form_open {
            self.close_add_form();
        } else {
            self.open_add_form();
        }
        self.add_form_open
    }

    /// 添加好友并关闭表单；校验失败时状态不变
    pub fn add_friend(&mut self, name: &str, image: &str) -> Result<FriendId, EntryError> {
        let id = self.roster.add_friend(name, image).inspect_err(|err| {
            debug!(%err, "add friend rejected");
        })?;
        self.add_form_open = false;
        info!(%id, name = name.trim(), "friend added");
        Ok(id)
    }

    // ============ 选中 / 分摊 ============

    /// 选中好友（再次选中同一好友则取消），并关闭添加表单
    pub fn select_friend(&mut self, id: FriendId) {
        if !self.roster.contains(id) {
            debug!(%id, "select ignored: unknown friend");
            return;
        }
        self.selected = if self.selected == Some(id) {
            None
        } else {
            Some(id)
        };
        self.add_form_open = false;
        debug!(selected = ?self.selected, "selection changed");
    }

    /// 调整好友余额并清除选中，返回新余额
    ///
    /// 金额溢出时不做任何修改（包括选中），分摊表单保持打开。
    pub fn apply_balance_delta(&mut self, id: FriendId, delta: Money) -> Result<Money, EntryError> {
        match self.roster.apply_delta(id, delta) {
            Ok(balance) => {
                self.selected = None;
                info!(%id, %delta, %balance, "balance updated");
                Ok(balance)
            }
            Err(EntryError::AmountTooLarge) => {
                debug!(%id, %delta, "balance update rejected: overflow");
                Err(EntryError::AmountTooLarge)
            }
            Err(err) => {
                self.selected = None;
                debug!(%id, %err, "balance update ignored");
                Err(err)
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Roster::seeded())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn friend_at(session: &Session, index: usize) -> FriendId {
        session.roster().get_index(index).unwrap().id()
    }

    #[test]
    fn test_initial_state() {
        let session = Session::default();
        assert_eq!(session.mode(), SessionMode::Browsing);
        assert_eq!(session.selected_id(), None);
        assert!(!session.is_add_form_open());
    }

    #[test]
    fn test_select_toggle() {
        let mut session = Session::default();
        let clark = friend_at(&session, 0);

        session.select_friend(clark);
        assert_eq!(session.selected_id(), Some(clark));
        assert_eq!(session.mode(), SessionMode::Splitting(clark));

        session.select_friend(clark);
        assert_eq!(session.selected_id(), None);
    }

    #[test]
    fn test_select_other_switches() {
        let mut session = Session::default();
        let clark = friend_at(&session, 0);
        let sarah = friend_at(&session, 1);

        session.select_friend(clark);
        session.select_friend(sarah);
        assert_eq!(session.selected_id(), Some(sarah));
        assert_eq!(session.selected_friend().unwrap().name(), "Sarah");
    }

    #[test]
    fn test_open_add_form_clears_selection() {
        let mut session = Session::default();
        session.select_friend(friend_at(&session, 0));

        session.open_add_form();
        assert!(session.is_add_form_open());
        assert_eq!(session.selected_id(), None);
        assert_eq!(session.mode(), SessionMode::AddingFriend);
    }

    #[test]
    fn test_select_closes_add_form() {
        let mut session = Session::default();
        assert!(session.toggle_add_form());

        let sarah = friend_at(&session, 1);
        session.select_friend(sarah);
        assert!(!session.is_add_form_open());
        assert_eq!(session.mode(), SessionMode::Splitting(sarah));
    }

    #[test]
    fn test_toggle_add_form() {
        let mut session = Session::default();
        assert!(session.toggle_add_form());
        assert!(!session.toggle_add_form());
        assert_eq!(session.mode(), SessionMode::Browsing);
    }

    #[test]
    fn test_add_friend_closes_form() {
        let mut session = Session::default();
        session.open_add_form();

        let id = session.add_friend("Dana", "https://i.pravatar.cc/48").unwrap();
        assert!(!session.is_add_form_open());
        assert_eq!(session.roster().len(), 4);
        assert_eq!(session.roster().get(id).unwrap().balance(), Money::ZERO);
    }

    #[test]
    fn test_add_friend_rejected_keeps_form_open() {
        let mut session = Session::default();
        session.open_add_form();

        assert_eq!(
            session.add_friend("", "https://i.pravatar.cc/48"),
            Err(EntryError::MissingName)
        );
        assert!(session.is_add_form_open());
        assert_eq!(session.roster().len(), 3);
    }

    #[test]
    fn test_apply_balance_delta_clears_selection() {
        let mut session = Session::default();
        let clark = friend_at(&session, 0);
        session.select_friend(clark);

        assert_eq!(session.apply_balance_delta(clark, Money::new(60)), Ok(Money::new(53)));
        assert_eq!(session.selected_id(), None);
        assert_eq!(session.roster().get_index(1).unwrap().balance(), Money::new(20));
        assert_eq!(session.roster().get_index(2).unwrap().balance(), Money::ZERO);
    }

    #[test]
    fn test_overflowing_delta_keeps_state() {
        let mut roster = Roster::new();
        let sarah = roster.push_seed("Sarah", "img", Money::from_decimal(Decimal::MAX));
        let mut session = Session::new(roster);
        session.select_friend(sarah);

        assert_eq!(
            session.apply_balance_delta(sarah, Money::new(1)),
            Err(EntryError::AmountTooLarge)
        );
        assert_eq!(session.selected_id(), Some(sarah));
        assert_eq!(
            session.roster().get(sarah).unwrap().balance(),
            Money::from_decimal(Decimal::MAX)
        );
    }

    #[test]
    fn test_select_unknown_friend_is_noop() {
        let mut session = Session::default();
        let mut other = Roster::new();
        let stranger = other.add_friend("Eve", "img").unwrap();

        session.open_add_form();
        session.select_friend(stranger);
        assert_eq!(session.mode(), SessionMode::AddingFriend);
    }
}

//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use std::io;

use crossterm::event::KeyCode;

use super::actions::Action;
use super::forms::SplitField;
use super::state::App;
use crate::session::SessionMode;

/// 根据当前模式和按键获取对应的 Action
pub fn get_action(mode: SessionMode, field: SplitField, key: KeyCode) -> Option<Action> {
    match mode {
        SessionMode::Browsing => match key {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveCursorDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveCursorUp),
            KeyCode::Enter | KeyCode::Char('s') => Some(Action::SelectFriend),
            KeyCode::Char('a') => Some(Action::ToggleAddForm),
            _ => None,
        },
        SessionMode::AddingFriend => match key {
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Tab => Some(Action::NextField),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
        // 金额字段只接受数字，字母可以用作快捷键
        SessionMode::Splitting(_) => match key {
            KeyCode::Esc => Some(Action::CloseSplit),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Tab => Some(Action::NextField),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveCursorDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveCursorUp),
            KeyCode::Char('s') => Some(Action::SelectFriend),
            KeyCode::Char('a') => Some(Action::ToggleAddForm),
            KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right if field == SplitField::Payer => {
                Some(Action::TogglePayer)
            }
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => Some(Action::Input(c)),
            _ => None,
        },
    }
}

/// 处理按键事件
pub fn handle_key_event(app: &mut App, key: KeyCode) -> io::Result<bool> {
    if let Some(action) = get_action(app.mode(), app.split_form.field, key) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}

//! 布局辅助函数

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 左侧好友栏 + 右侧工作区
pub fn main_columns(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);
    (chunks[0], chunks[1])
}

/// 好友栏：列表在上，添加表单（打开时）在下
pub fn sidebar_rows(area: Rect, add_form_open: bool) -> (Rect, Option<Rect>) {
    if !add_form_open {
        return (area, None);
    }
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(8)])
        .split(area);
    (chunks[0], Some(chunks[1]))
}

//! 通用 UI 组件
//!
//! 面板、输入框、余额描述等通用组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::models::{BalanceStatus, Friend};

/// [组件] 面板基础框架，返回内部区域
pub fn render_panel(frame: &mut Frame, area: Rect, title: &str, color: Color) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .style(Style::default().fg(color));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// [组件] 带有标题和样式的输入框
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    is_focused: bool,
    active_color: Color,
) {
    let style = if is_focused {
        Style::default()
            .fg(active_color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let input = Paragraph::new(value.to_string())
        .style(style)
        .wrap(Wrap { trim: false })
        .block(Block::default().title(title.to_string()).borders(Borders::ALL));
    frame.render_widget(input, area);
}

/// [组件] 余额描述，按余额符号着色
pub fn balance_span(friend: &Friend) -> Span<'static> {
    match friend.status() {
        BalanceStatus::Even => Span::styled(
            format!("你和 {} 两清了", friend.name()),
            Style::default().fg(Color::Gray),
        ),
        BalanceStatus::FriendOwes(amount) => Span::styled(
            format!("{} 欠你 {}", friend.name(), amount),
            Style::default().fg(Color::Green),
        ),
        BalanceStatus::UserOwes(amount) => Span::styled(
            format!("你欠 {} {}", friend.name(), amount),
            Style::default().fg(Color::Red),
        ),
    }
}

//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use super::forms::{AddField, SplitField};
use super::state::App;
use crate::models::Friend;
use crate::session::SessionMode;
use crate::split::Payer;
use components::{balance_span, render_input_widget, render_panel};
use layouts::{main_columns, sidebar_rows};

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Min(10),   // 主体
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);

    let (sidebar, workspace) = main_columns(chunks[1]);
    let (list_area, form_area) = sidebar_rows(sidebar, app.session.is_add_form_open());
    render_friends(frame, app, list_area);
    if let Some(area) = form_area {
        render_add_form(frame, app, area);
    }

    match app.mode() {
        SessionMode::Splitting(_) => render_split_form(frame, app, workspace),
        SessionMode::Browsing | SessionMode::AddingFriend => render_overview(frame, app, workspace),
    }

    render_help(frame, app, chunks[2]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("🍽 tabsplit 分账本")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_friends(frame: &mut Frame, app: &App, area: Rect) {
    let selected = app.session.selected_id();
    let items: Vec<ListItem> = app
        .session
        .roster()
        .iter()
        .map(|friend| {
            let is_selected = selected == Some(friend.id());
            let marker = if is_selected { "▶ " } else { "  " };
            let name_style = if is_selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("{:<10}", friend.name()), name_style),
                balance_span(friend),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().title("好友").borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    state.select(Some(app.cursor));

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_add_form(frame: &mut Frame, app: &App, area: Rect) {
    let inner = render_panel(frame, area, "添加好友", Color::Cyan);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(inner);

    let form = &app.add_form;
    render_input_widget(
        frame,
        chunks[0],
        "好友名字",
        &form.name,
        form.field == AddField::Name,
        Color::Yellow,
    );
    render_input_widget(
        frame,
        chunks[1],
        "头像地址",
        &form.image,
        form.field == AddField::Image,
        Color::Yellow,
    );
}

fn render_split_form(frame: &mut Frame, app: &App, area: Rect) {
    let Some(friend) = app.session.selected_friend() else {
        return;
    };
    let title = format!("与 {} 分摊账单", friend.name());
    let inner = render_panel(frame, area, &title, Color::Cyan);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(inner);

    let form = &app.split_form;
    render_input_widget(
        frame,
        chunks[0],
        "账单金额",
        form.bill_text(),
        form.field == SplitField::Bill,
        Color::Yellow,
    );
    render_input_widget(
        frame,
        chunks[1],
        "你的花费",
        form.user_share_text(),
        form.field == SplitField::UserShare,
        Color::Yellow,
    );
    let friend_share = form
        .friend_share()
        .map(|m| m.to_string())
        .unwrap_or_default();
    render_input_widget(
        frame,
        chunks[2],
        &format!("{} 的花费", friend.name()),
        &friend_share,
        false,
        Color::Gray,
    );
    let payer = match form.payer {
        Payer::User => "你".to_string(),
        Payer::Friend => friend.name().to_string(),
    };
    render_input_widget(
        frame,
        chunks[3],
        "谁付的账单",
        &format!("◀ {payer} ▶"),
        form.field == SplitField::Payer,
        Color::Yellow,
    );

    let message = app.message.as_deref().unwrap_or("按 Enter 提交");
    frame.render_widget(
        Paragraph::new(message.to_string()).style(Style::default().fg(Color::Gray)),
        chunks[4],
    );
}

fn render_overview(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(3)])
        .split(area);

    render_details(frame, app.friend_under_cursor(), chunks[0]);
    render_activity(frame, app, chunks[1]);
}

fn render_details(frame: &mut Frame, friend: Option<&Friend>, area: Rect) {
    let lines = match friend {
        Some(friend) => vec![
            Line::from(format!("名字: {}", friend.name())),
            Line::from(format!("头像: {}", friend.image())),
            Line::from(balance_span(friend)),
        ],
        None => vec![Line::from("暂无好友，按 'a' 添加")],
    };

    let details = Paragraph::new(lines)
        .block(Block::default().title("详情").borders(Borders::ALL))
        .wrap(Wrap { trim: true });

    frame.render_widget(details, area);
}

fn render_activity(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .activity
        .iter()
        .map(|entry| {
            let payer = match entry.payer {
                Payer::User => "你".to_string(),
                Payer::Friend => entry.friend.clone(),
            };
            ListItem::new(format!(
                "{}  {} 付款，{} 余额变化 {}",
                entry.at.format("%H:%M:%S"),
                payer,
                entry.friend,
                entry.delta
            ))
        })
        .collect();

    let list = List::new(items).block(Block::default().title("本次记录").borders(Borders::ALL));
    frame.render_widget(list, area);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.mode() {
        SessionMode::Browsing => "[j/k] 导航  [Enter/s] 选择  [a] 添加好友  [q] 退出",
        SessionMode::AddingFriend => "[Tab] 切换字段  [Enter] 添加  [Esc] 关闭",
        SessionMode::Splitting(_) => {
            "[Tab] 下一项  [Space] 切换付款人  [Enter] 提交  [s] 选择  [a] 添加好友  [Esc] 关闭"
        }
    };

    let message = match app.mode() {
        SessionMode::Splitting(_) => "",
        _ => app.message.as_deref().unwrap_or(""),
    };
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

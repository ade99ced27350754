use std::io;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::info;

use tabsplit::config::{config_path, load_config};
use tabsplit::logging;
use tabsplit::ui::{self, App, render};

fn main() -> Result<()> {
    // 配置文件路径 (~/.config/tabsplit/config.toml)
    let path = config_path()?;
    let config = load_config(&path)?;

    let log_path = logging::init(&config.log_filter)?;
    info!(config = %path.display(), log = %log_path.display(), "starting tabsplit");

    // 创建应用状态
    let mut app = App::new(&config);

    // 设置终端
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal backend")?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor().context("failed to restore cursor")?;

    info!(friends = app.session.roster().len(), "exiting, balances discarded");
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal
            .draw(|f| render(f, app))
            .context("failed to draw frame")?;

        if let Event::Key(key) = event::read().context("failed to read event")? {
            if key.kind == KeyEventKind::Press && ui::handle_key_event(app, key.code)? {
                break;
            }
        }
    }
    Ok(())
}

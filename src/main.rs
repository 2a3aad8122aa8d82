mod app;
mod cli;
mod error;
mod event;
mod logging;
mod storage;
mod store;
mod theme;
mod ui;
mod ui_state;

use std::io;
use std::panic;

use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tracing::{info, warn};

use app::App;
use cli::{Cli, Commands};
use storage::config::Config;

/// 启动 TUI 界面
fn run_tui(config: Config) -> io::Result<()> {
    let config_path = match storage::config::config_path() {
        Ok(path) => Some(path),
        Err(e) => {
            warn!(error = %e, "theme changes will not be saved");
            None
        }
    };

    // 初始化终端
    let mut terminal = ratatui::init();
    enable_mouse_capture(&mut io::stdout(), ratatui::restore)?;

    let mut app = App::new(config, config_path);
    info!(theme = app.ui.theme.label(), "todo started");

    // 运行主循环
    let result = run(&mut terminal, &mut app);

    // 恢复终端
    execute!(io::stdout(), DisableMouseCapture)?;
    ratatui::restore();

    let progress = app.store.compute_progress();
    info!(
        total = progress.total_count,
        completed = progress.completed_count,
        "todo exited"
    );

    result
}

/// 开启鼠标捕获；失败时先恢复终端再返回错误
fn enable_mouse_capture(out: &mut impl io::Write, restore: impl FnOnce()) -> io::Result<()> {
    execute!(out, EnableMouseCapture).inspect_err(|_| restore())
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if !event::handle_events(app)? {
            break;
        }
    }
    Ok(())
}

fn main() -> io::Result<()> {
    // Set up panic hook to restore terminal state on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(io::stdout(), DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));

    // 解析命令行参数
    let cli = Cli::parse();

    // 日志写文件，失败不影响运行
    if let Err(e) = logging::init() {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let config = storage::config::load_config().with_overrides(cli.theme, cli.popup_secs);

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => run_tui(config)?,
        Commands::Config => {
            if let Err(e) = cli::config::execute(&config) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct BrokenWriter;

    impl io::Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_mouse_capture_failure_restores_terminal() {
        let restored = Cell::new(false);
        let result = enable_mouse_capture(&mut BrokenWriter, || restored.set(true));
        assert!(result.is_err());
        assert!(restored.get());
    }

    #[cfg(unix)]
    #[test]
    fn test_mouse_capture_success_keeps_terminal() {
        let restored = Cell::new(false);
        let mut out = Vec::new();
        enable_mouse_capture(&mut out, || restored.set(true)).unwrap();
        assert!(!restored.get());
    }
}

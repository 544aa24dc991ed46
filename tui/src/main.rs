use std::{
    ffi::OsStr,
    fs::File,
    io::stdout,
    path::{Path, PathBuf},
    sync::Mutex,
};

use color_eyre::{
    config::HookBuilder,
    eyre::{self, WrapErr},
};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use tab_set::TabsOptions;
use tracing_subscriber::EnvFilter;

mod app;
mod form;
mod mode;
mod utils;
mod widgets;

const LOG_FILE_ENV: &str = "TABS_TUI_LOG";
const DEFAULT_LOG_FILE: &str = "tabs-tui.log";

fn main() -> eyre::Result<()> {
    let Some(options) = std::env::args()
        .nth(1)
        .map_or_else(|| Some(TabsOptions::default()), |arg| parse_max_items(&arg))
    else {
        eprintln!(
            "Usage: {} [<max-tabs>|none]",
            std::env::current_exe()
                .ok()
                .as_deref()
                .and_then(Path::file_name)
                .and_then(OsStr::to_str)
                .unwrap_or("<app>")
        );
        return Ok(());
    };

    install_hooks()?;
    init_tracing()?;

    // Debounce timers of the tab set run on this runtime while the UI loop polls the terminal.
    let runtime = tokio::runtime::Runtime::new().wrap_err("failed to start tokio runtime")?;
    let _guard = runtime.enter();

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let mut terminal = ratatui::Terminal::new(CrosstermBackend::new(stdout()))?;

    tracing::info!(max_items = ?options.max_items, "Starting");
    let result = app::App::run(&mut terminal, options);

    restore_terminal()?;
    result
}

fn parse_max_items(arg: &str) -> Option<TabsOptions> {
    match arg {
        "none" | "0" => Some(TabsOptions::default().unbounded()),
        _ => arg
            .parse::<usize>()
            .ok()
            .map(|max| TabsOptions::default().with_max_items(max)),
    }
}

fn init_tracing() -> eyre::Result<()> {
    let path = std::env::var_os(LOG_FILE_ENV)
        .map_or_else(|| PathBuf::from(DEFAULT_LOG_FILE), PathBuf::from);
    let file = File::create(&path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}

/// Report errors and panics on a restored terminal.
fn install_hooks() -> eyre::Result<()> {
    let (panic_hook, eyre_hook) = HookBuilder::default().into_hooks();
    eyre_hook.install()?;

    let panic_hook = panic_hook.into_panic_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        panic_hook(info);
    }));

    Ok(())
}

fn restore_terminal() -> std::io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)
}

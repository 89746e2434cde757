mod app;
mod cli;
mod clock;
mod command;
mod config;
mod logging;
mod runtime;
mod tracker;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::{Cli, Commands};
use clock::SystemClock;
use config::TallyConfig;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut cfg = TallyConfig::load()?;
    if let Some(level) = cli.log_level {
        cfg.log_level = level;
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run(cfg),
        Commands::ConfigPath => {
            let path = TallyConfig::config_path()?;
            if !path.exists() {
                TallyConfig::default().save()?;
                println!("Created default config at {}", path.display());
            }
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn run(cfg: TallyConfig) -> Result<()> {
    let log_dir = TallyConfig::log_dir()?;
    logging::enable_logging(&log_dir, &cfg.log_level)
        .with_context(|| format!("Failed to set up logging in {}", log_dir.display()))?;
    let mut app = App::new(&cfg, Box::new(SystemClock));
    tracing::info!(tasks = app.registry.len(), "starting tally-tui");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app, cfg.tick_rate());

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("event loop failed: {err:?}");
        eprintln!("Error: {:?}", err);
    }

    // The loop may have ended on an error rather than a quit key.
    if app.running {
        app.quit();
    }
    for line in app.summary() {
        println!("{}", line);
    }
    tracing::info!("shutting down");

    Ok(())
}

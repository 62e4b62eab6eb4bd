use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use guest_shell::app::App;
use guest_shell::config::Config;
use guest_shell::nav::SystemBrowser;
use guest_shell::services::{RealTimeSource, SystemRandom};
use std::path::PathBuf;

/// A portfolio terminal: a miniature shell with a virtual filesystem and a
/// privilege-escalation easter egg. Don't `sudo rm -rf /`. Or do.
#[derive(Debug, Parser)]
#[command(name = "guestsh", version)]
struct Args {
    /// Path to a JSON config file (prompt identity, site base URL, boot timeout)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip the boot sequence
    #[arg(long)]
    no_boot: bool,

    /// Append tracing output to this file (stdout would corrupt the TUI)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_tracing(log_file: Option<&PathBuf>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_file.as_ref())?;

    let mut config = Config::load(args.config.as_deref())?;
    if args.no_boot {
        config.boot_timeout_ms = 0;
    }

    let last_login = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let mut app = App::new(
        &config,
        Box::new(SystemRandom::new()),
        RealTimeSource::shared(),
        Box::new(SystemBrowser::new(config.site_base_url.clone())),
        &last_login,
    );

    let mut terminal = ratatui::init();
    let _ = execute!(std::io::stdout(), EnableMouseCapture);
    let result = app.run(&mut terminal);
    let _ = execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();
    result
}

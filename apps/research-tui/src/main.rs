//! reSearch TUI
//!
//! Terminal client for the reSearch scholarly article search service.

mod app;
mod keybindings;
mod mode;
mod views;
mod widgets;

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use research_core::{ClientConfig, FileStore, HttpApi, KeyValueStore, MemoryStore};

use app::App;

/// Terminal client for the reSearch scholarly article search service
#[derive(Parser, Debug)]
#[command(
    name = "research",
    version,
    about,
    long_about = None,
    after_help = "Environment:\n  RESEARCH_API_URL  Override api.base_url\n  RUST_LOG          Log filter (default: info)"
)]
struct Cli {
    /// Read configuration from this file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// How often background results are applied while no key is pressed
const TICK: Duration = Duration::from_millis(50);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let (config, api) = connect(&cli)?;
    let data_dir = config.storage.resolve_data_dir();
    let _log_guard = init_logging(data_dir.as_ref());
    tracing::info!(api = %config.api.base_url, "starting research {}", research_core::version());

    let api = Arc::new(api);
    let store: Arc<dyn KeyValueStore> = match data_dir {
        Some(dir) => Arc::new(FileStore::new(dir)),
        None => {
            tracing::warn!("No data directory available, bookmarks will not persist");
            Arc::new(MemoryStore::new())
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config, api, store);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("terminal error: {}", err);
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    let mut dirty = true;
    loop {
        if dirty {
            terminal.draw(|f| app.render(f))?;
            dirty = false;
        }

        if event::poll(TICK)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if app.handle_key(key.code, key.modifiers) {
                        return Ok(());
                    }
                    dirty = true;
                }
                Event::Resize(_, _) => dirty = true,
                _ => {}
            }
        }

        dirty |= app.tick();
    }
}

/// Load the configuration and build the API client it describes.
fn connect(cli: &Cli) -> research_core::Result<(ClientConfig, HttpApi)> {
    let config = ClientConfig::load(cli.config.as_deref())?;
    let api = HttpApi::new(&config.api)?;
    Ok((config, api))
}

/// Log to `<data_dir>/research.log`; the terminal belongs to the UI.
///
/// The returned guard flushes the background writer when dropped.
fn init_logging(data_dir: Option<&PathBuf>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_ansi(false);

    match data_dir.filter(|dir| fs::create_dir_all(dir).is_ok()) {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::never(dir, "research.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            builder.with_writer(non_blocking).init();
            Some(guard)
        }
        None => {
            builder.with_writer(io::sink).init();
            None
        }
    }
}

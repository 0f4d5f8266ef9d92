//! # DataViz Explorer Entry Point
//!
//! This is the main entry point for the DataViz Explorer TUI.
//!
//! ## Overview
//!
//! The explorer shows data structure operations as animated rows of boxes.
//! The array page animates Access, Insert, Remove, Iterate and Search on a
//! random element; the array editor lets you append, pop and search values
//! yourself.
//!
//! ## Usage
//!
//! ```bash
//! # Start on the home page
//! dataviz
//!
//! # Jump straight to the array visualizer in light mode
//! dataviz --route /arrays --theme light
//!
//! # Write trace output to a file (filter with DATAVIZ_LOG)
//! DATAVIZ_LOG=dataviz=debug dataviz --log-file /tmp/dataviz.log
//!
//! # Debug mode - print operations and routes and exit
//! dataviz --debug
//! ```
//!
//! ## Architecture
//!
//! 1. **Config**: Loads the persisted theme from the config directory
//! 2. **Event loop**: Polls the terminal with a timeout sized to the next
//!    animation deadline, then ticks the mounted page
//! 3. **UI**: Renders sidebar, page and status with ratatui
//!
//! ## Key Bindings
//!
//! ### Sidebar
//! - `q` / `Q` - Quit the application
//! - `j` / `Down`, `k` / `Up` - Move selection
//! - `h` / `l` - Switch between Structures and Algorithms
//! - `Enter` - Open the selected page
//! - `t` - Toggle dark / light theme
//! - `i` - Show/hide info modal
//!
//! ### Array operations
//! - `Enter` / `1`-`5` - Run an operation
//! - `e` - Open the array editor
//! - `Esc` / `Tab` - Back to the sidebar
//!
//! ### Array editor
//! - digits - Type into the focused input
//! - `Enter` - Add / search
//! - `Del` - Remove the last element
//! - `Tab` - Next input

use dataviz::ui::config::Config;
use dataviz::ui::routes::{self, Route};
use dataviz::ui::theme::ThemeMode;
use dataviz::ui::{self, App};
use dataviz::viz;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Upper bound on how long the loop waits for input while nothing is animating.
const IDLE_POLL: Duration = Duration::from_millis(100);

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(
                event::read().context("Failed to read keyboard event")?,
            ))
        } else {
            Ok(None)
        }
    }
}

/// DataViz Explorer - watch data structure operations step by step
#[derive(Parser, Debug)]
#[command(name = "dataviz")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Animated data structure explorer for the terminal", long_about = None)]
struct Args {
    /// Path of the config file holding the theme preference
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Theme for this session: dark or light
    #[arg(long, value_name = "MODE")]
    theme: Option<ThemeMode>,

    /// Page to open on start, e.g. /arrays
    #[arg(short, long, value_name = "PATH", default_value = "/")]
    route: String,

    /// Write trace output to this file (level from DATAVIZ_LOG)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Print the operation catalog and route table and exit
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);

        original_hook(panic_info);
    }));

    let result = run_application(args).await;

    // Restore panic hook
    let _ = panic::take_hook();

    result
}

/// Install a file-backed tracing subscriber. The terminal belongs to the UI,
/// so logs never go to stdout/stderr.
fn init_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env("DATAVIZ_LOG").unwrap_or_else(|_| "dataviz=info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(())
}

async fn run_application(args: Args) -> Result<()> {
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let config_path = match args.config {
        Some(path) => Some(path),
        None => match Config::default_path() {
            Ok(path) => Some(path),
            Err(e) => {
                warn!(error = %e, "theme preference will not be persisted");
                None
            }
        },
    };

    let mut config = config_path
        .as_deref()
        .map(Config::load)
        .unwrap_or_default();
    if let Some(theme) = args.theme {
        config.theme = theme;
    }

    let start_route = Route::from_path(&args.route);

    // Debug mode: print catalog and routes and exit
    if args.debug {
        print_debug(&config, config_path.as_deref(), &start_route);
        return Ok(());
    }

    info!(theme = %config.theme, route = %start_route, "starting");

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(config, config_path);
    app.navigate(start_route);
    app.toggle_focus();

    // Run the app and ensure cleanup happens even on error
    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(&mut app, &mut event_reader, |app| {
        terminal
            .draw(|f| ui::render(f, app))
            .context("Failed to draw terminal UI")?;
        Ok(())
    })
    .await;

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    run_result?;
    cleanup_result?;

    Ok(())
}

fn print_debug(config: &Config, config_path: Option<&Path>, start_route: &Route) {
    println!("=== Configuration ===");
    match config_path {
        Some(path) => println!("  Config file: {}", path.display()),
        None => println!("  Config file: (none)"),
    }
    println!("  Theme: {}", config.theme);
    println!("  Start route: {start_route}");

    println!("\n=== Operations ===");
    for record in viz::catalog() {
        println!("  {}", record.name);
        for line in record.code.lines() {
            println!("      {line}");
        }
    }

    println!("\n=== Routes ===");
    for path in routes::known_paths() {
        let route = Route::from_path(&path);
        println!("  {path:<24} {}", route.title());
    }
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

/// How long to wait for input: until the next animation step, but never
/// longer than [`IDLE_POLL`].
fn poll_timeout(next_deadline: Option<Instant>, now: Instant) -> Duration {
    match next_deadline {
        Some(deadline) => deadline.saturating_duration_since(now).min(IDLE_POLL),
        None => IDLE_POLL,
    }
}

async fn run_app<D>(app: &mut App, event_reader: &mut dyn EventReader, mut draw: D) -> Result<()>
where
    D: FnMut(&App) -> Result<()>,
{
    loop {
        app.tick(Instant::now());
        draw(app)?;

        let timeout = poll_timeout(app.next_deadline(), Instant::now());

        // No event: loop around to fire due steps and redraw
        if let Some(Event::Key(key)) = event_reader.read_event(timeout)? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key, Instant::now());
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

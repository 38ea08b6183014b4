//! slate entrypoint: argument parsing, logging, and the event loop.
//!
//! The loop is strictly synchronous: one bounded poll for a key, apply
//! it fully (translate then dispatch), then repaint, then poll again.
//! There is no background work and no other blocking point.

use anyhow::Result;
use clap::Parser;
use core_actions::KeyTranslator;
use core_actions::dispatcher::dispatch;
use core_config::Config;
use core_render::{Viewport, frame, present, viewport};
use core_state::{EditorState, load_buffer};
use core_terminal::CrosstermBackend;
use core_text::Direction;
use std::path::{Path, PathBuf};
use std::sync::Once;
use std::time::Duration;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "slate", version, about = "Inline terminal text editor")]
struct Args {
    /// File to edit (must exist and decode as UTF-8).
    pub path: PathBuf,
    /// Number of visible text rows (overrides slate.toml).
    #[arg(long = "lines")]
    pub lines: Option<u16>,
    /// Start with modal (vim-style) editing.
    #[arg(long = "modal")]
    pub modal: bool,
    /// Configuration file path (overrides discovery of slate.toml).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

fn configure_logging() -> Option<WorkerGuard> {
    let log_dir = Path::new(".");
    let log_path = log_dir.join("slate.log");
    if log_path.exists() {
        let _ = std::fs::remove_file(&log_path);
    }
    let file_appender = tracing_appender::rolling::never(log_dir, "slate.log");
    let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
    match tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(nb_writer)
        .with_ansi(false)
        .try_init()
    {
        Ok(_) => Some(guard),
        Err(_) => {
            // A global subscriber is already installed; drop the guard so
            // the writer shuts down.
            None
        }
    }
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!(target: "runtime.panic", ?info, "panic");
            default_panic(info);
        }));
    });
}

fn main() -> Result<()> {
    let log_guard = configure_logging();
    install_panic_hook();
    let args = Args::parse();
    info!(target: "runtime", "startup");

    let file = core_config::load_from(args.config.clone())?;
    let config = Config::resolve(&file, args.lines, args.modal);
    // Load failure aborts here, before the terminal is touched.
    let buffer = load_buffer(&args.path)?;
    let mut state = EditorState::new(buffer, args.path.clone(), config.modal);
    info!(
        target: "runtime",
        file = %args.path.display(),
        lines = state.buffer.line_count(),
        rows = config.rows,
        margin = config.margin,
        modal = config.modal,
        config_override = args.config.is_some(),
        "session_start"
    );

    let mut backend = CrosstermBackend::new();
    let unsaved = {
        let _guard = backend.enter_guard()?;
        run_session(&mut state, config)?
    };
    // The guard has restored the terminal; the warning lands at the
    // prompt, after the session.
    if unsaved {
        println!("Warning: unsaved changes!");
    }
    info!(target: "runtime", unsaved, "session_end");
    drop(log_guard);
    Ok(())
}

/// The synchronous event loop. Returns whether unsaved changes remain.
fn run_session(state: &mut EditorState, config: Config) -> Result<bool> {
    let mut translator = KeyTranslator::new();
    let mut view = render(state, Viewport::new(0, 0), config)?;
    loop {
        let Some(key) = core_input::poll_key(POLL_INTERVAL)? else {
            // No event within the poll window; expire stale notices.
            if state.tick_notice() {
                view = render(state, view, config)?;
            }
            continue;
        };
        let Some(action) = translator.translate(&state.mode, &key) else {
            continue;
        };
        let result = dispatch(action, state);
        if result.quit {
            break;
        }
        if result.dirty {
            view = render(state, view, config)?;
        }
    }
    Ok(state.buffer.is_modified())
}

/// One full repaint: query dimensions, scroll the viewport, compose the
/// frame, flush it. Returns the viewport for the next pass.
fn render(state: &EditorState, prev: Viewport, config: Config) -> Result<Viewport> {
    let (cols, _) = core_terminal::size()?;
    let forward = state.cursor.direction == Direction::Forward;
    let (view, scroll) = viewport::visible_range(
        state.cursor.line,
        prev,
        config.rows,
        state.buffer.line_count(),
        config.margin,
        forward,
    );
    if scroll != 0 {
        tracing::trace!(target: "render.frame", scroll, start = view.start, end = view.end, "viewport_scrolled");
    }
    let f = frame::compose(state, view, cols as usize, config.rows);
    present(&f)?;
    Ok(view)
}

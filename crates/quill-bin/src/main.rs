//! Quill entrypoint.
use anyhow::{Context, Result};
use clap::Parser;
use core_actions::{Controller, Frontend, LoopControl, open_file};
use core_config::EditorConfig;
use core_input::CrosstermEventSource;
use core_model::{EditorModel, View};
use core_render::RenderEngine;
use core_state::EditorState;
use core_terminal::{CrosstermBackend, TerminalBackend, enter_guard};
use core_text::Document;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;

mod frontend;

use frontend::TerminalFrontend;

const LOG_FILE: &str = "quill.log";
const HELP_MESSAGE: &str = "HELP: Ctrl-F = find | Ctrl-S = save | Ctrl-Q = quit";

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "quill", version, about = "Quill editor")]
struct Args {
    /// Optional file to open at startup. If omitted an empty unnamed document is used.
    pub path: Option<PathBuf>,
    /// Optional configuration file path (overrides discovery of `quill.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

fn configure_logging() -> Option<WorkerGuard> {
    let log_dir = Path::new(".");
    let log_path = log_dir.join(LOG_FILE);
    if log_path.exists() {
        let _ = std::fs::remove_file(&log_path);
    }

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_ansi(false)
        .with_writer(writer)
        .try_init()
        .ok()
        .map(|_| guard)
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

fn window_title() -> String {
    format!("Quill - v{}", env!("CARGO_PKG_VERSION"))
}

/// Open `path` or start an empty unnamed document. Failing to open is fatal.
fn load_document(path: Option<&Path>, tab_stop: usize) -> Result<Document> {
    match path {
        Some(path) => {
            open_file(path, tab_stop).with_context(|| format!("opening {}", path.display()))
        }
        None => Ok(Document::new(tab_stop)),
    }
}

/// Drive the editor until the controller asks to quit.
fn event_loop<F: Frontend>(
    model: &mut EditorModel,
    frontend: &mut F,
    controller: &mut Controller,
) -> Result<()> {
    loop {
        frontend.refresh(model)?;
        let key = frontend.read_key(model)?;
        if controller.process_key(key, model, frontend)? == LoopControl::Quit {
            return Ok(());
        }
    }
}

fn run<B: TerminalBackend>(
    backend: &mut B,
    document: Document,
    settings: EditorConfig,
) -> Result<()> {
    let guard = enter_guard(backend, &window_title()).context("entering raw mode")?;
    let (cols, rows) = guard.backend().size().context("querying window size")?;
    info!(target: "runtime", cols, rows, "terminal_ready");

    let mut state = EditorState::with_message_timeout(document, settings.message_timeout);
    state.set_status(HELP_MESSAGE);
    let mut model = EditorModel::new(state, View::new(cols, rows));
    let mut frontend = TerminalFrontend::new(
        CrosstermEventSource::new(),
        RenderEngine::new(),
        std::io::stdout(),
    );
    let mut controller = Controller::new(settings.quit_times);

    let result = event_loop(&mut model, &mut frontend, &mut controller);
    info!(target: "runtime", frames = frontend.frames(), "event_loop_exit");
    result
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = configure_logging();
    install_panic_hook();
    info!(target: "runtime", "startup");

    let config = core_config::load_from(args.config.clone())?;
    let settings = config.effective();
    let document = load_document(args.path.as_deref(), settings.tab_stop)?;
    info!(
        target: "runtime.startup",
        path = args.path.as_ref().map(|p| p.display().to_string()).as_deref(),
        lines = document.line_count(),
        tab_stop = settings.tab_stop,
        quit_times = settings.quit_times,
        config = config.source.as_ref().map(|p| p.display().to_string()).as_deref(),
        "bootstrap_complete"
    );

    let mut backend = CrosstermBackend::new();
    let result = run(&mut backend, document, settings);
    if let Err(e) = &result {
        warn!(target: "runtime", error = %format!("{e:#}"), "fatal");
    }
    info!(target: "runtime", "shutdown");
    result
}

//! TRIAGE symptom intake: interactive Ratatui TUI.
//!
//! Local analysis runs on the async runtime behind a simulated delay;
//! triage requests go to the service at `TRIAGE_ENDPOINT` (default
//! `http://127.0.0.1:5000`) and fall back to a fixed assessment when it is
//! unreachable. Logs go to `triage-tui.log` in the temp dir.
//!
//! Environment:
//!   TRIAGE_ENDPOINT            base URL of the triage service
//!   TRIAGE_ANALYSIS_DELAY_MS   simulated analysis latency (default 2000)
//!   RUST_LOG                   log filter (default info)

mod app;
mod ui;

use std::{
    io,
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::{runtime::Runtime, sync::mpsc};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use triage_client::{ClientConfig, TriageClient};
use triage_core::{analysis::DEFAULT_ANALYSIS_DELAY, AnalysisRunner, SymptomClassifier};

use crate::app::{Action, App, WorkerEvent};

const TICK: Duration = Duration::from_millis(100);

// ── Setup ─────────────────────────────────────────────────────────────────────

fn init_logging() {
    let path = std::env::temp_dir().join("triage-tui.log");
    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        // No log file, no logging; the terminal belongs to the UI.
        Err(_) => return,
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
}

fn analysis_delay() -> Duration {
    std::env::var("TRIAGE_ANALYSIS_DELAY_MS")
        .ok()
        .and_then(|v| v.parse().ok())
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_ANALYSIS_DELAY)
}

fn client_config() -> ClientConfig {
    match std::env::var("TRIAGE_ENDPOINT") {
        Ok(url) if !url.trim().is_empty() => ClientConfig::default().with_base_url(url),
        _ => ClientConfig::default(),
    }
}

/// Background workers shared by every triggered request.
struct Workers {
    runtime: Runtime,
    runner: Arc<AnalysisRunner>,
    client: Arc<TriageClient>,
    tx: mpsc::UnboundedSender<WorkerEvent>,
}

impl Workers {
    fn start(&self, action: Action) {
        match action {
            Action::Analyze(ticket) => {
                let runner = Arc::clone(&self.runner);
                let tx = self.tx.clone();
                self.runtime.spawn(async move {
                    let outcome = runner.analyze(&ticket.symptoms).await;
                    let _ = tx.send(WorkerEvent::Analysis {
                        id: ticket.id,
                        outcome,
                    });
                });
            }
            Action::Triage(ticket) => {
                let client = Arc::clone(&self.client);
                let tx = self.tx.clone();
                self.runtime.spawn(async move {
                    let result = client
                        .submit_triage(&ticket.request.symptoms, &ticket.request.location)
                        .await;
                    let _ = tx.send(WorkerEvent::Triage {
                        id: ticket.id,
                        result,
                    });
                });
            }
            Action::None | Action::Quit => {}
        }
    }
}

// ── Terminal setup / teardown ─────────────────────────────────────────────────

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

// ── Main event loop ───────────────────────────────────────────────────────────

fn main() -> io::Result<()> {
    init_logging();

    let client = TriageClient::new(client_config())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
    let delay = analysis_delay();
    info!(endpoint = %client.config().assess_url(), delay_ms = delay.as_millis() as u64, "starting intake UI");

    let (tx, mut rx) = mpsc::unbounded_channel();
    let workers = Workers {
        runtime: Runtime::new()?,
        runner: Arc::new(AnalysisRunner::new(SymptomClassifier::new()).with_delay(delay)),
        client: Arc::new(client),
        tx,
    };

    // Restore the terminal before the panic message is printed.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let mut terminal = setup_terminal()?;
    let mut app = App::new();
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        let timeout = TICK.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match app.handle_key(key) {
                        Action::Quit => break,
                        action => workers.start(action),
                    }
                }
            }
        }

        while let Ok(done) = rx.try_recv() {
            app.apply(done);
        }

        if last_tick.elapsed() >= TICK {
            app.tick();
            last_tick = Instant::now();
        }
    }

    restore_terminal(&mut terminal)?;
    if app.is_busy() {
        warn!("exiting with requests in flight");
    }
    workers.runtime.shutdown_background();
    Ok(())
}

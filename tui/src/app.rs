//! Intake screen state and key handling.
//!
//! `App` owns the `IntakeSession` and turns key presses into either local
//! edits or work for the runtime (`Action`). Results come back as
//! `WorkerEvent`s and are applied through the session's result slots, so a
//! late answer to a cancelled request never reaches the screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, warn};

use triage_contracts::{assessment::TriageResult, condition::AnalysisResult, error::TriageOutcome};
use triage_core::{
    session::{AnalysisTicket, RequestId, TriageTicket},
    IntakeSession,
};

pub const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Symptoms,
    Location,
}

/// Work the event loop must start on behalf of the screen.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    Analyze(AnalysisTicket),
    Triage(TriageTicket),
}

/// A finished background request.
#[derive(Debug)]
pub enum WorkerEvent {
    Analysis {
        id: RequestId,
        outcome: TriageOutcome<AnalysisResult>,
    },
    Triage {
        id: RequestId,
        result: TriageResult,
    },
}

pub struct App {
    pub session: IntakeSession,
    pub focus: Field,
    pub status: String,
    spinner_frame: usize,
}

impl App {
    pub fn new() -> Self {
        Self {
            session: IntakeSession::new(),
            focus: Field::Symptoms,
            status: "Describe your symptoms, then press F2 to analyze or F3 for triage.".to_string(),
            spinner_frame: 0,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.session.analysis().is_busy() || self.session.triage().is_busy()
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER[self.spinner_frame % SPINNER.len()]
    }

    pub fn tick(&mut self) {
        if self.is_busy() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }

    fn field_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Symptoms => &mut self.session.symptoms,
            Field::Location => &mut self.session.location,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => Action::Quit,

            KeyCode::F(2) => self.trigger_analysis(),
            KeyCode::Char('a') if ctrl => self.trigger_analysis(),
            KeyCode::F(3) => self.trigger_triage(),
            KeyCode::Char('t') if ctrl => self.trigger_triage(),

            KeyCode::Esc => {
                if self.session.analysis().is_busy() {
                    self.session.cancel_analysis();
                    self.status = "Analysis cancelled.".to_string();
                }
                Action::None
            }

            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Field::Symptoms => Field::Location,
                    Field::Location => Field::Symptoms,
                };
                Action::None
            }

            KeyCode::Backspace => {
                self.field_mut().pop();
                Action::None
            }

            KeyCode::Char(c) if !ctrl => {
                self.field_mut().push(c);
                Action::None
            }

            _ => Action::None,
        }
    }

    fn trigger_analysis(&mut self) -> Action {
        match self.session.begin_analysis() {
            Some(ticket) => {
                debug!(request_id = ticket.id.0, "analysis triggered");
                self.status = "Analyzing symptoms...".to_string();
                Action::Analyze(ticket)
            }
            None => Action::None,
        }
    }

    fn trigger_triage(&mut self) -> Action {
        match self.session.begin_triage() {
            Some(ticket) => {
                debug!(request_id = ticket.id.0, "triage triggered");
                self.status = "Requesting triage assessment...".to_string();
                Action::Triage(ticket)
            }
            None => Action::None,
        }
    }

    pub fn apply(&mut self, event: WorkerEvent) {
        match event {
            WorkerEvent::Analysis { id, outcome: Ok(result) } => {
                if self.session.finish_analysis(id, result) {
                    self.status = "Analysis complete.".to_string();
                }
            }
            WorkerEvent::Analysis { id, outcome: Err(e) } => {
                if self.session.fail_analysis(id) {
                    warn!(error = %e, "analysis failed");
                    self.status = format!("Analysis failed: {}", e);
                }
            }
            WorkerEvent::Triage { id, result } => {
                if self.session.finish_triage(id, result) {
                    self.status = "Triage assessment received.".to_string();
                }
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

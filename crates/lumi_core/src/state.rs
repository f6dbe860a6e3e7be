use crate::view_model::{progress_line, PanelViewModel, INITIALIZING_TEXT, LAUNCHING_TEXT};
use crate::{ProgressSnapshot, StatusResponse};

/// Identifies one launch and the polling that follows it.
pub type SessionId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelPhase {
    #[default]
    Idle,
    Launching,
    Polling,
    Completed,
    Errored,
}

impl PanelPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, PanelPhase::Completed | PanelPhase::Errored)
    }

    /// The launch control is only live outside an active session.
    pub fn accepts_submit(self) -> bool {
        matches!(
            self,
            PanelPhase::Idle | PanelPhase::Completed | PanelPhase::Errored
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelState {
    phase: PanelPhase,
    session: SessionId,
    status_text: String,
    progress_visible: bool,
    progress_text: String,
    progress: Option<ProgressSnapshot>,
    normalize_requests: bool,
    dirty: bool,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables the backend-equivalent request normalization before sending.
    pub fn with_normalization(mut self, enabled: bool) -> Self {
        self.normalize_requests = enabled;
        self
    }

    pub fn phase(&self) -> PanelPhase {
        self.phase
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn normalizes_requests(&self) -> bool {
        self.normalize_requests
    }

    pub fn view(&self) -> PanelViewModel {
        PanelViewModel {
            phase: self.phase,
            session: self.session,
            status_text: self.status_text.clone(),
            launch_enabled: self.phase.accepts_submit(),
            progress_visible: self.progress_visible,
            progress_percent: self.progress.map(|p| p.percentage()).unwrap_or(0.0),
            progress_text: self.progress_text.clone(),
        }
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// True when `session` is the live one and the panel sits in `phase`.
    pub(crate) fn is_current(&self, session: SessionId, phase: PanelPhase) -> bool {
        self.session == session && self.phase == phase
    }

    pub(crate) fn begin_launch(&mut self) -> SessionId {
        self.session += 1;
        self.phase = PanelPhase::Launching;
        self.status_text = LAUNCHING_TEXT.to_string();
        self.progress_visible = true;
        self.progress = None;
        self.progress_text = INITIALIZING_TEXT.to_string();
        self.dirty = true;
        self.session
    }

    pub(crate) fn launch_accepted(&mut self, message: String) {
        self.phase = PanelPhase::Polling;
        self.status_text = message;
        self.dirty = true;
    }

    pub(crate) fn launch_failed(&mut self, reason: &str) {
        self.phase = PanelPhase::Errored;
        self.status_text = format!("Error: {reason}");
        self.dirty = true;
    }

    pub(crate) fn apply_status(&mut self, response: StatusResponse) {
        self.status_text = response.status;
        if let Some(progress) = response.progress {
            self.progress_visible = true;
            self.progress_text = progress_line(&progress);
            self.progress = Some(progress);
        }
        self.dirty = true;
    }

    pub(crate) fn complete(&mut self) {
        self.phase = PanelPhase::Completed;
        self.dirty = true;
    }

    pub(crate) fn poll_failed(&mut self) {
        self.phase = PanelPhase::Errored;
        self.dirty = true;
    }
}

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use lumi_core::{update, FormSnapshot, Msg, PanelPhase, PanelState, PanelViewModel};
use lumi_logging::{lumi_debug, lumi_error, lumi_info, parse_level};

use super::cli::Cli;
use super::config::{PanelConfig, CONFIG_FILENAME};
use super::effects::EffectRunner;
use super::logging;
use super::ui::render::{form_summary, render};
use super::ui::terminal::TerminalSurface;

/// How long the loop blocks waiting for a client event before re-checking.
const EVENT_WAIT: Duration = Duration::from_millis(100);

pub fn run_app() -> anyhow::Result<PanelPhase> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir().context("resolving working directory")?;
    let config_path = PanelConfig::locate(cli.config.as_deref(), &cwd);
    let mut config = PanelConfig::load_or_default(config_path.as_deref())?;
    config.apply_overrides(&cli);

    logging::initialize(config.log, parse_level(&config.log_level));
    match &config_path {
        Some(path) => lumi_info!("Loaded config from {:?}", path),
        None => lumi_debug!("No {} in {:?}, using defaults", CONFIG_FILENAME, cwd),
    }
    lumi_info!("Starting lumi_panel against {}", config.server_url);

    let form = cli.form_snapshot()?;
    let settings = config
        .client_settings()
        .context("invalid server url")?;
    let runner = EffectRunner::new(&settings).context("starting client")?;
    let state = PanelState::new().with_normalization(config.normalize_request);

    let mut panel = Panel::new(state, runner, TerminalSurface::new(true));
    Ok(panel.run(form))
}

struct Panel {
    state: PanelState,
    runner: EffectRunner,
    surface: TerminalSurface,
}

impl Panel {
    fn new(state: PanelState, runner: EffectRunner, surface: TerminalSurface) -> Self {
        Self {
            state,
            runner,
            surface,
        }
    }

    /// Submits `form` and drives the session until it completes or errors.
    fn run(&mut self, form: FormSnapshot) -> PanelPhase {
        self.surface.apply(form_summary(&form));
        self.dispatch(Msg::FormSubmitted(form));

        while !self.state.phase().is_terminal() {
            if let Some(msg) = self.runner.next_msg(EVENT_WAIT) {
                self.dispatch(msg);
            }
        }

        let phase = self.state.phase();
        self.surface.finish(phase);
        match phase {
            PanelPhase::Completed => lumi_info!(
                "Session {} completed: {} ({})",
                self.state.session(),
                self.surface.status(),
                self.surface.bar_width()
            ),
            _ => lumi_error!(
                "Session {} ended with an error: {}",
                self.state.session(),
                self.surface.status()
            ),
        }
        phase
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        let view = state.view();
        self.state = state;

        // Stops are issued before the terminal view is drawn.
        self.runner.enqueue(effects);
        if was_dirty {
            self.enqueue_render(&view);
        }
    }

    fn enqueue_render(&mut self, view: &PanelViewModel) {
        self.surface.apply(render(view));
    }
}

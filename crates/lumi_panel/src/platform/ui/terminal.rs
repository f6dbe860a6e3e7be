//! Terminal host for the panel elements.
//!
//! Status and form lines scroll above a single indicatif bar that stands in
//! for `progress-container`.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use lumi_core::PanelPhase;
use lumi_logging::{lumi_debug, lumi_trace, lumi_warn};

use super::constants::*;
use super::render::{css_width, UiCommand};

/// Bar resolution: tenths of a percent.
const BAR_SCALE: f64 = 10.0;

pub struct TerminalSurface {
    bar: ProgressBar,
    interactive: bool,
    form: String,
    status: String,
    launch_enabled: bool,
    progress_visible: bool,
    bar_percent: f64,
    progress_text: String,
}

impl TerminalSurface {
    /// A non-interactive surface tracks element state without drawing.
    pub fn new(interactive: bool) -> Self {
        let bar = ProgressBar::with_draw_target(
            Some((100.0 * BAR_SCALE) as u64),
            ProgressDrawTarget::hidden(),
        );
        match ProgressStyle::with_template("{bar:40.cyan/dim} {prefix:>6}  {msg}") {
            Ok(style) => bar.set_style(style.progress_chars("━━─")),
            Err(err) => lumi_warn!("Falling back to default bar style: {}", err),
        }
        Self {
            bar,
            interactive,
            form: String::new(),
            status: String::new(),
            launch_enabled: true,
            progress_visible: false,
            bar_percent: 0.0,
            progress_text: String::new(),
        }
    }

    pub fn apply(&mut self, commands: Vec<UiCommand>) {
        for command in commands {
            self.apply_one(command);
        }
    }

    fn apply_one(&mut self, command: UiCommand) {
        lumi_trace!("{} <- {:?}", command.element().name(), command);
        match command {
            UiCommand::SetText { element, text } if element == STATUS => {
                if text != self.status {
                    self.print_line(&format!("status: {text}"));
                    self.status = text;
                }
            }
            UiCommand::SetText { element, text } if element == PROGRESS_TEXT => {
                if text != self.progress_text {
                    self.bar.set_message(text.clone());
                    self.progress_text = text;
                }
            }
            UiCommand::SetText { element, text } if element == LUMI_FORM => {
                if text != self.form {
                    self.print_line(&format!("form: {text}"));
                    self.form = text;
                }
            }
            UiCommand::SetEnabled { element, enabled } if element == LAUNCH_BUTTON => {
                if enabled != self.launch_enabled {
                    lumi_debug!("Launch control {}", if enabled { "enabled" } else { "disabled" });
                    self.launch_enabled = enabled;
                }
            }
            UiCommand::SetVisible { element, visible } if element == PROGRESS_CONTAINER => {
                if visible == self.progress_visible {
                    return;
                }
                self.progress_visible = visible;
                if visible && self.interactive {
                    self.bar.set_draw_target(ProgressDrawTarget::stderr());
                } else if !visible {
                    self.bar.set_draw_target(ProgressDrawTarget::hidden());
                }
            }
            UiCommand::SetBarWidth { element, percent } if element == PROGRESS_BAR_FILL => {
                self.bar_percent = percent;
                self.bar.set_prefix(css_width(percent));
                self.bar
                    .set_position((percent.clamp(0.0, 100.0) * BAR_SCALE) as u64);
            }
            other => lumi_warn!("No terminal binding for {}", other.element().name()),
        }
    }

    fn print_line(&self, line: &str) {
        if self.interactive {
            self.bar.suspend(|| println!("{line}"));
        }
    }

    /// Leaves the bar on screen: finished on completion, abandoned otherwise.
    pub fn finish(&self, phase: PanelPhase) {
        if phase == PanelPhase::Completed {
            self.bar.finish();
        } else {
            self.bar.abandon();
        }
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn bar_width(&self) -> String {
        css_width(self.bar_percent)
    }

    #[cfg(test)]
    pub fn launch_enabled(&self) -> bool {
        self.launch_enabled
    }

    #[cfg(test)]
    pub fn progress_visible(&self) -> bool {
        self.progress_visible
    }

    #[cfg(test)]
    pub fn progress_text(&self) -> &str {
        &self.progress_text
    }

    #[cfg(test)]
    pub fn form(&self) -> &str {
        &self.form
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::ui::render::{form_summary, render};
    use lumi_core::{update, FormSnapshot, Msg, PanelState};

    #[test]
    fn launching_view_shows_initial_progress() {
        let mut surface = TerminalSurface::new(false);
        let form = FormSnapshot::new().with_field("tag", "cat");
        surface.apply(form_summary(&form));

        let (state, _) = update(PanelState::new(), Msg::FormSubmitted(form));
        surface.apply(render(&state.view()));

        assert_eq!(surface.form(), "tag=cat");
        assert_eq!(surface.status(), "Launching Lumi...");
        assert!(!surface.launch_enabled());
        assert!(surface.progress_visible());
        assert_eq!(surface.bar_width(), "0%");
        assert_eq!(surface.progress_text(), "Initializing...");
    }

    #[test]
    fn bar_width_is_not_clamped_in_text() {
        let mut surface = TerminalSurface::new(false);
        surface.apply(vec![UiCommand::SetBarWidth {
            element: PROGRESS_BAR_FILL,
            percent: 120.0,
        }]);

        assert_eq!(surface.bar_width(), "120%");
    }
}

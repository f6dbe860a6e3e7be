use crate::{PanelPhase, ProgressSnapshot, SessionId};

pub const LAUNCHING_TEXT: &str = "Launching Lumi...";
pub const INITIALIZING_TEXT: &str = "Initializing...";

/// Everything a host needs to draw the panel, detached from the state machine.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PanelViewModel {
    pub phase: PanelPhase,
    pub session: SessionId,
    pub status_text: String,
    pub launch_enabled: bool,
    pub progress_visible: bool,
    pub progress_percent: f64,
    pub progress_text: String,
}

impl PanelViewModel {
    /// CSS-style width of the progress bar fill, e.g. `"25%"`.
    pub fn bar_width(&self) -> String {
        format_percent(self.progress_percent)
    }
}

/// Formats a percentage to one decimal, dropping the decimal when the
/// rounded value is whole.
pub fn format_percent(percent: f64) -> String {
    if !percent.is_finite() {
        return "0%".to_string();
    }
    let rounded = (percent * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}%")
    } else {
        format!("{rounded:.1}%")
    }
}

pub(crate) fn progress_line(progress: &ProgressSnapshot) -> String {
    format!(
        "Downloaded: {}/{} (Skipped: {})",
        progress.downloaded_images, progress.requested_media, progress.skipped_images
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_formatting() {
        assert_eq!(format_percent(0.0), "0%");
        assert_eq!(format_percent(25.0), "25%");
        assert_eq!(format_percent(100.0 / 3.0), "33.3%");
        assert_eq!(format_percent(f64::NAN), "0%");
    }

    #[test]
    fn values_that_round_to_whole_drop_the_decimal() {
        assert_eq!(format_percent(99.96), "100%");
        assert_eq!(format_percent(0.04), "0%");
        assert_eq!(format_percent(12.25), "12.3%");
        assert_eq!(format_percent(66.66), "66.7%");
    }
}

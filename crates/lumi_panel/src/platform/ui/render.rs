use lumi_core::{format_percent, FormSnapshot, PanelViewModel};

use super::constants::*;

#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    SetText { element: ElementId, text: String },
    SetEnabled { element: ElementId, enabled: bool },
    SetVisible { element: ElementId, visible: bool },
    SetBarWidth { element: ElementId, percent: f64 },
}

impl UiCommand {
    pub fn element(&self) -> ElementId {
        match self {
            UiCommand::SetText { element, .. }
            | UiCommand::SetEnabled { element, .. }
            | UiCommand::SetVisible { element, .. }
            | UiCommand::SetBarWidth { element, .. } => *element,
        }
    }
}

/// Style width of a bar command, e.g. `"25%"`.
pub fn css_width(percent: f64) -> String {
    format_percent(percent)
}

/// Describes the submitted form once, before the launch starts.
pub fn form_summary(form: &FormSnapshot) -> Vec<UiCommand> {
    let text = if form.is_empty() {
        "(no fields)".to_string()
    } else {
        form.fields()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join(" ")
    };
    vec![UiCommand::SetText {
        element: LUMI_FORM,
        text,
    }]
}

#[allow(clippy::vec_init_then_push)]
pub fn render(view: &PanelViewModel) -> Vec<UiCommand> {
    let mut cmds = Vec::new();

    cmds.push(UiCommand::SetText {
        element: STATUS,
        text: view.status_text.clone(),
    });

    cmds.push(UiCommand::SetEnabled {
        element: LAUNCH_BUTTON,
        enabled: view.launch_enabled,
    });

    cmds.push(UiCommand::SetVisible {
        element: PROGRESS_CONTAINER,
        visible: view.progress_visible,
    });

    if view.progress_visible {
        cmds.push(UiCommand::SetBarWidth {
            element: PROGRESS_BAR_FILL,
            percent: view.progress_percent,
        });
        cmds.push(UiCommand::SetText {
            element: PROGRESS_TEXT,
            text: view.progress_text.clone(),
        });
    }

    cmds
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumi_core::{update, Msg, PanelState, ProgressSnapshot, StatusResponse};
    use pretty_assertions::assert_eq;

    fn polling_view_with(progress: ProgressSnapshot) -> PanelViewModel {
        let (state, _) = update(PanelState::new(), Msg::FormSubmitted(FormSnapshot::new()));
        let (state, _) = update(
            state,
            Msg::LaunchAccepted {
                session: 1,
                message: "Lumi process started".to_string(),
            },
        );
        let (state, _) = update(
            state,
            Msg::StatusReceived {
                session: 1,
                response: StatusResponse {
                    status: "Running".to_string(),
                    progress: Some(progress),
                },
            },
        );
        state.view()
    }

    #[test]
    fn idle_panel_hides_progress() {
        let cmds = render(&PanelState::new().view());

        assert_eq!(
            cmds,
            vec![
                UiCommand::SetText {
                    element: STATUS,
                    text: String::new()
                },
                UiCommand::SetEnabled {
                    element: LAUNCH_BUTTON,
                    enabled: true
                },
                UiCommand::SetVisible {
                    element: PROGRESS_CONTAINER,
                    visible: false
                },
            ]
        );
    }

    #[test]
    fn running_progress_binds_bar_and_text() {
        let view = polling_view_with(ProgressSnapshot {
            requested_media: 20,
            downloaded_images: 5,
            skipped_images: 1,
            ..ProgressSnapshot::default()
        });
        let cmds = render(&view);

        let width = cmds.iter().find_map(|cmd| match cmd {
            UiCommand::SetBarWidth { percent, .. } => Some(css_width(*percent)),
            _ => None,
        });
        assert_eq!(width.as_deref(), Some("25%"));
        assert!(cmds.contains(&UiCommand::SetText {
            element: PROGRESS_TEXT,
            text: "Downloaded: 5/20 (Skipped: 1)".to_string()
        }));
        assert!(cmds.contains(&UiCommand::SetEnabled {
            element: LAUNCH_BUTTON,
            enabled: false
        }));
    }

    #[test]
    fn form_summary_lists_fields_in_order() {
        let form = FormSnapshot::new()
            .with_field("project", "cats")
            .with_field("tag", "a, b");
        let cmds = form_summary(&form);

        assert_eq!(cmds.len(), 1);
        assert_eq!(cmds[0].element(), LUMI_FORM);
        assert_eq!(
            cmds[0],
            UiCommand::SetText {
                element: LUMI_FORM,
                text: "project=cats tag=a, b".to_string()
            }
        );
    }
}

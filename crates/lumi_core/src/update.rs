use crate::{Effect, LaunchRequest, Msg, PanelPhase, PanelState};

/// Pure update function: applies a message to state and returns any effects.
///
/// Messages tagged with a session other than the live one, or arriving in a
/// phase that does not expect them, leave the state untouched.
pub fn update(mut state: PanelState, msg: Msg) -> (PanelState, Vec<Effect>) {
    let effects = match msg {
        Msg::FormSubmitted(form) => {
            if !state.phase().accepts_submit() {
                return (state, Vec::new());
            }
            let mut request = LaunchRequest::from_form(&form);
            if state.normalizes_requests() {
                request = request.normalized();
            }
            let session = state.begin_launch();
            vec![Effect::SendLaunch { session, request }]
        }
        Msg::LaunchAccepted { session, message } => {
            if !state.is_current(session, PanelPhase::Launching) {
                return (state, Vec::new());
            }
            state.launch_accepted(message);
            vec![Effect::StartPolling { session }]
        }
        Msg::LaunchFailed { session, reason } => {
            if !state.is_current(session, PanelPhase::Launching) {
                return (state, Vec::new());
            }
            state.launch_failed(&reason);
            Vec::new()
        }
        Msg::StatusReceived { session, response } => {
            if !state.is_current(session, PanelPhase::Polling) {
                return (state, Vec::new());
            }
            let terminal = response.is_terminal();
            state.apply_status(response);
            if terminal {
                state.complete();
                vec![Effect::StopPolling { session }]
            } else {
                Vec::new()
            }
        }
        Msg::PollFailed { session, .. } => {
            if !state.is_current(session, PanelPhase::Polling) {
                return (state, Vec::new());
            }
            state.poll_failed();
            vec![Effect::StopPolling { session }]
        }
    };

    (state, effects)
}

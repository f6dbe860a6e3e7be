use crate::{FormSnapshot, SessionId, StatusResponse};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User submitted the launch form.
    FormSubmitted(FormSnapshot),
    /// `/launch` answered OK; `message` is the plain-text body.
    LaunchAccepted { session: SessionId, message: String },
    /// `/launch` failed at the network level or with a non-OK status.
    LaunchFailed { session: SessionId, reason: String },
    /// One `/status` poll returned a decoded response.
    StatusReceived {
        session: SessionId,
        response: StatusResponse,
    },
    /// One `/status` poll failed; polling is over for this session.
    PollFailed { session: SessionId, reason: String },
}

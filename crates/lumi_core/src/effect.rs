use crate::{LaunchRequest, SessionId};

/// Side effects requested by [`crate::update`]; executed by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// POST the request to `/launch`.
    SendLaunch {
        session: SessionId,
        request: LaunchRequest,
    },
    /// Begin the periodic `/status` task for this session.
    StartPolling { session: SessionId },
    /// Cancel the `/status` task for this session, dropping any in-flight request.
    StopPolling { session: SessionId },
}

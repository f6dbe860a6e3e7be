use std::time::Duration;

use lumi_client::{ClientError, ClientEvent, ClientHandle, ClientSettings};
use lumi_core::{Effect, Msg};
use lumi_logging::{lumi_debug, lumi_info};

/// Executes core effects on the client and turns client events back into messages.
pub struct EffectRunner {
    client: ClientHandle,
}

impl EffectRunner {
    pub fn new(settings: &ClientSettings) -> Result<Self, ClientError> {
        Ok(Self {
            client: ClientHandle::new(settings)?,
        })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SendLaunch { session, request } => {
                    lumi_info!("SendLaunch session={} request={:?}", session, request);
                    self.client.launch(session, request);
                }
                Effect::StartPolling { session } => {
                    lumi_debug!("StartPolling session={}", session);
                    self.client.start_polling(session);
                }
                Effect::StopPolling { session } => {
                    lumi_debug!("StopPolling session={}", session);
                    self.client.stop_polling(session);
                }
            }
        }
    }

    pub fn next_msg(&self, timeout: Duration) -> Option<Msg> {
        self.client.recv_timeout(timeout).map(map_event)
    }
}

fn map_event(event: ClientEvent) -> Msg {
    match event {
        ClientEvent::Launched {
            session,
            result: Ok(message),
        } => Msg::LaunchAccepted { session, message },
        ClientEvent::Launched {
            session,
            result: Err(error),
        } => Msg::LaunchFailed {
            session,
            reason: error.to_string(),
        },
        ClientEvent::Status { session, response } => Msg::StatusReceived { session, response },
        ClientEvent::PollFailed { session, error } => Msg::PollFailed {
            session,
            reason: error.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumi_client::FailureKind;

    #[test]
    fn launch_error_becomes_failure_reason() {
        let msg = map_event(ClientEvent::Launched {
            session: 2,
            result: Err(ClientError {
                kind: FailureKind::HttpStatus(500),
                message: "500 Internal Server Error".to_string(),
            }),
        });

        assert_eq!(
            msg,
            Msg::LaunchFailed {
                session: 2,
                reason: "http status 500: 500 Internal Server Error".to_string(),
            }
        );
    }
}

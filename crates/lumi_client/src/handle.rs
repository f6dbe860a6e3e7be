use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use lumi_core::{LaunchRequest, SessionId};
use lumi_logging::{lumi_debug, lumi_info, lumi_warn};

use crate::poller::{ChannelEventSink, EventSink, PollHandle, Poller};
use crate::{ClientError, ClientEvent, ClientSettings, FailureKind, ReqwestTransport, Transport};

enum ClientCommand {
    Launch {
        session: SessionId,
        request: LaunchRequest,
    },
    StartPolling {
        session: SessionId,
    },
    StopPolling {
        session: SessionId,
    },
}

/// Runs backend calls on a dedicated runtime thread and hands results back
/// through a channel the host drains at its own pace.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: mpsc::Receiver<ClientEvent>,
}

impl ClientHandle {
    pub fn new(settings: &ClientSettings) -> Result<Self, ClientError> {
        let transport = Arc::new(ReqwestTransport::new(settings)?);
        Self::with_transport(transport, settings.poll_interval)
    }

    pub fn with_transport(
        transport: Arc<dyn Transport>,
        poll_interval: Duration,
    ) -> Result<Self, ClientError> {
        let poller = Poller::new(transport.clone(), poll_interval)?;
        let runtime = tokio::runtime::Runtime::new()
            .map_err(|err| ClientError::new(FailureKind::Runtime, err.to_string()))?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let sink: Arc<dyn EventSink> = Arc::new(ChannelEventSink::new(event_tx));

        thread::spawn(move || {
            let mut active: Option<PollHandle> = None;
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    ClientCommand::Launch { session, request } => {
                        let transport = transport.clone();
                        let sink = sink.clone();
                        runtime.spawn(async move {
                            let result = transport.launch(&request).await;
                            match &result {
                                Ok(message) => {
                                    lumi_info!("Session {} launched: {}", session, message)
                                }
                                Err(err) => lumi_warn!("Session {} launch failed: {}", session, err),
                            }
                            sink.emit(ClientEvent::Launched { session, result });
                        });
                    }
                    ClientCommand::StartPolling { session } => {
                        if let Some(previous) = active.take() {
                            previous.cancel();
                        }
                        active = Some(poller.spawn(runtime.handle(), session, sink.clone()));
                    }
                    ClientCommand::StopPolling { session } => {
                        if let Some(handle) = active.take_if(|h| h.session() == session) {
                            handle.cancel();
                            lumi_debug!("Polling cancelled for session {}", session);
                        }
                    }
                }
            }
            if let Some(handle) = active.take() {
                handle.cancel();
            }
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn launch(&self, session: SessionId, request: LaunchRequest) {
        let _ = self.cmd_tx.send(ClientCommand::Launch { session, request });
    }

    pub fn start_polling(&self, session: SessionId) {
        let _ = self.cmd_tx.send(ClientCommand::StartPolling { session });
    }

    pub fn stop_polling(&self, session: SessionId) {
        let _ = self.cmd_tx.send(ClientCommand::StopPolling { session });
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks for at most `timeout` waiting for the next event.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<ClientEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

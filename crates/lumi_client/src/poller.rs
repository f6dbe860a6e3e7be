use std::sync::Arc;
use std::time::Duration;

use lumi_core::SessionId;
use lumi_logging::{lumi_debug, lumi_error, lumi_trace};
use tokio::runtime::Handle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::{ClientError, ClientEvent, FailureKind, Transport};

pub trait EventSink: Send + Sync {
    fn emit(&self, event: ClientEvent);
}

pub struct ChannelEventSink {
    tx: std::sync::mpsc::Sender<ClientEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: std::sync::mpsc::Sender<ClientEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: ClientEvent) {
        let _ = self.tx.send(event);
    }
}

/// Spawns one `/status` polling task per session.
#[derive(Clone)]
pub struct Poller {
    transport: Arc<dyn Transport>,
    interval: Duration,
}

impl Poller {
    /// Fails on a zero `interval`; tokio tickers need a non-zero period.
    pub fn new(transport: Arc<dyn Transport>, interval: Duration) -> Result<Self, ClientError> {
        if interval.is_zero() {
            return Err(ClientError::new(
                FailureKind::Runtime,
                "poll interval must be greater than zero",
            ));
        }
        Ok(Self {
            transport,
            interval,
        })
    }

    /// Starts polling on `runtime`. The first request goes out one interval
    /// after the call; the task ends on a terminal status, on the first
    /// failure, or when the returned handle is cancelled. A task that dies
    /// without reporting is turned into `PollFailed`.
    pub fn spawn(
        &self,
        runtime: &Handle,
        session: SessionId,
        sink: Arc<dyn EventSink>,
    ) -> PollHandle {
        let token = CancellationToken::new();
        let task = runtime.spawn(poll_loop(
            self.transport.clone(),
            self.interval,
            session,
            token.clone(),
            sink.clone(),
        ));
        let watch = token.clone();
        runtime.spawn(async move {
            if let Err(err) = task.await {
                if watch.is_cancelled() {
                    return;
                }
                lumi_error!("Poller for session {} died: {}", session, err);
                sink.emit(ClientEvent::PollFailed {
                    session,
                    error: ClientError::new(FailureKind::Runtime, err.to_string()),
                });
            }
        });
        lumi_debug!("Poller started for session {}", session);
        PollHandle { session, token }
    }
}

/// Cancels a running poller. Dropping the handle does not cancel it.
#[derive(Debug, Clone)]
pub struct PollHandle {
    session: SessionId,
    token: CancellationToken,
}

impl PollHandle {
    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

async fn poll_loop(
    transport: Arc<dyn Transport>,
    interval: Duration,
    session: SessionId,
    token: CancellationToken,
    sink: Arc<dyn EventSink>,
) {
    let mut ticker = tokio::time::interval_at(Instant::now() + interval, interval);
    // One request at a time: a slow response delays the next tick.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = token.cancelled() => break,
            _ = ticker.tick() => {}
        }

        let result = tokio::select! {
            biased;
            _ = token.cancelled() => break,
            result = transport.status() => result,
        };
        if token.is_cancelled() {
            break;
        }

        match result {
            Ok(response) => {
                lumi_trace!("Session {} status: {:?}", session, response);
                let terminal = response.is_terminal();
                sink.emit(ClientEvent::Status { session, response });
                if terminal {
                    break;
                }
            }
            Err(error) => {
                lumi_error!("Error polling status for session {}: {}", session, error);
                sink.emit(ClientEvent::PollFailed { session, error });
                break;
            }
        }
    }

    lumi_debug!("Poller stopped for session {}", session);
}

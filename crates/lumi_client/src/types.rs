use std::fmt;

use lumi_core::{SessionId, StatusResponse};
use thiserror::Error;

/// Results reported back to the host, always tagged with their session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    /// `/launch` finished; `Ok` carries the plain-text body.
    Launched {
        session: SessionId,
        result: Result<String, ClientError>,
    },
    /// One successful `/status` poll.
    Status {
        session: SessionId,
        response: StatusResponse,
    },
    /// A `/status` poll failed and the poller has stopped.
    PollFailed {
        session: SessionId,
        error: ClientError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ClientError {
    pub kind: FailureKind,
    pub message: String,
}

impl ClientError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Decode,
    Network,
    Runtime,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Decode => write!(f, "invalid response"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Runtime => write!(f, "runtime error"),
        }
    }
}

//! Lumi client: HTTP transport, cancellable status polling and effect execution.
mod handle;
mod poller;
mod transport;
mod types;

pub use handle::ClientHandle;
pub use poller::{ChannelEventSink, EventSink, PollHandle, Poller};
pub use transport::{ClientSettings, ReqwestTransport, Transport, DEFAULT_POLL_INTERVAL};
pub use types::{ClientError, ClientEvent, FailureKind};

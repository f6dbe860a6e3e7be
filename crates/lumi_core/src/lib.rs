//! Lumi core: pure panel state machine, wire types and view-model helpers.
mod effect;
mod form;
mod msg;
mod state;
mod update;
mod view_model;
mod wire;

pub use effect::Effect;
pub use form::{
    parse_media_count, split_list, FormSnapshot, LaunchRequest, DEFAULT_MEDIA_COUNT,
    MAX_MEDIA_COUNT, MIN_MEDIA_COUNT,
};
pub use msg::Msg;
pub use state::{PanelPhase, PanelState, SessionId};
pub use update::update;
pub use view_model::{format_percent, PanelViewModel, INITIALIZING_TEXT, LAUNCHING_TEXT};
pub use wire::{ProgressSnapshot, StatusResponse, COMPLETED_STATUS};

//! webMaster engine: backend API client and effect execution.
mod client;
mod controller;
mod engine;
mod types;

pub use client::{Backend, BackendSettings, ReqwestBackend};
pub use controller::{completion_msg, execute, SessionController};
pub use engine::{ChannelEventSink, EngineHandle, EventSink};
pub use types::{ApiError, AskRequest, AskResponse, EngineEvent, FailureKind, ScrapeRequest};

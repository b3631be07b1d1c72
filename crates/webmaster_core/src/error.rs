use thiserror::Error;

use crate::{ASK_FAILURE_MESSAGE, SCRAPE_FAILURE_NOTICE};

/// The only failures a user ever sees. Transport detail is collapsed into one
/// of these before it reaches the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("{}", SCRAPE_FAILURE_NOTICE)]
    ScrapeFailed,
    #[error("{}", ASK_FAILURE_MESSAGE)]
    AskFailed,
}

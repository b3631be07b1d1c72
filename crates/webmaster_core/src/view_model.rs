use crate::{Message, Notification, Phase, Theme};

/// Render snapshot of a [`crate::Session`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionViewModel {
    pub phase: Phase,
    pub target_url: String,
    pub pending_question: String,
    pub transcript: Vec<Message>,
    pub notification: Option<Notification>,
    pub theme: Theme,
    /// A request is outstanding; submit controls are disabled.
    pub busy: bool,
}

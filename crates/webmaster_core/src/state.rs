use std::time::Duration;

use crate::view_model::SessionViewModel;

pub const SCRAPE_SUCCESS_MESSAGE: &str = "Website scraped successfully. You can now ask questions.";
pub const SCRAPE_SUCCESS_NOTICE: &str = "Website scraped successfully.";
pub const SCRAPE_FAILURE_NOTICE: &str = "Error scraping website. Please try again.";
pub const ANSWER_RECEIVED_NOTICE: &str = "Answer received.";
pub const ASK_FAILURE_MESSAGE: &str = "Error getting answer. Please try again.";

/// How long a notification stays up unless dismissed or replaced.
pub const NOTIFICATION_AUTO_HIDE: Duration = Duration::from_secs(6);

/// Position in the scrape -> ask workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    AwaitingScrape,
    ScrapeInFlight,
    Ready,
    AskInFlight,
}

impl Phase {
    pub fn is_in_flight(self) -> bool {
        matches!(self, Phase::ScrapeInFlight | Phase::AskInFlight)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    User,
    System,
    Assistant,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub origin: Origin,
    pub text: String,
}

impl Message {
    pub fn new(origin: Origin, text: impl Into<String>) -> Self {
        Self {
            origin,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Increases with every notification, so a repeat of the same text is
    /// still a new banner.
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    /// Display time left before the banner hides itself.
    pub remaining: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Ephemeral per-run state. Only [`crate::update`] mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    target_url: String,
    phase: Phase,
    transcript: Vec<Message>,
    pending_question: String,
    notification: Option<Notification>,
    theme: Theme,
    notifications_issued: u64,
    dirty: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn view(&self) -> SessionViewModel {
        SessionViewModel {
            phase: self.phase,
            target_url: self.target_url.clone(),
            pending_question: self.pending_question.clone(),
            transcript: self.transcript.clone(),
            notification: self.notification.clone(),
            theme: self.theme,
            busy: self.phase.is_in_flight(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn target_url(&self) -> &str {
        &self.target_url
    }

    pub fn pending_question(&self) -> &str {
        &self.pending_question
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns whether anything visible changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            self.phase = phase;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_target_url(&mut self, url: String) {
        if self.target_url != url {
            self.target_url = url;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_pending_question(&mut self, question: String) {
        if self.pending_question != question {
            self.pending_question = question;
            self.mark_dirty();
        }
    }

    pub(crate) fn push_message(&mut self, origin: Origin, text: impl Into<String>) {
        self.transcript.push(Message::new(origin, text));
        self.mark_dirty();
    }

    pub(crate) fn notify(&mut self, severity: Severity, message: impl Into<String>) {
        self.notifications_issued += 1;
        self.notification = Some(Notification {
            id: self.notifications_issued,
            message: message.into(),
            severity,
            remaining: NOTIFICATION_AUTO_HIDE,
        });
        self.mark_dirty();
    }

    pub(crate) fn clear_notification(&mut self) {
        if self.notification.take().is_some() {
            self.mark_dirty();
        }
    }

    /// Counts the banner down; hides it once its display time is spent.
    pub(crate) fn elapse(&mut self, elapsed: Duration) {
        let expired = match self.notification.as_mut() {
            Some(notification) => {
                notification.remaining = notification.remaining.saturating_sub(elapsed);
                notification.remaining.is_zero()
            }
            None => false,
        };
        if expired {
            self.clear_notification();
        }
    }

    pub(crate) fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.mark_dirty();
    }
}

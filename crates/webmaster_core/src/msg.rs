use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input.
    UrlChanged(String),
    /// User submitted the current URL for scraping.
    ScrapeSubmitted,
    /// Backend answered the scrape request.
    ScrapeCompleted(Result<(), crate::SessionError>),
    /// User edited the question draft.
    QuestionChanged(String),
    /// User submitted the current question draft.
    QuestionSubmitted,
    /// Backend answered the ask request with the answer text.
    AskCompleted(Result<String, crate::SessionError>),
    /// User closed the notification banner.
    NotificationDismissed,
    /// User flipped between light and dark theme.
    ThemeToggled,
    /// Time passed since the previous tick; drives banner auto-hide.
    Tick(Duration),
}

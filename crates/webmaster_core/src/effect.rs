/// IO requested by [`crate::update`]. Each effect is answered by exactly one
/// completion message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// `POST /scrape`; answered by `Msg::ScrapeCompleted`.
    Scrape { url: String },
    /// `POST /ask`; answered by `Msg::AskCompleted`.
    Ask { question: String },
}

use webmaster_core::{Msg, Phase};

use super::constants::{CMD_DISMISS, CMD_QUIT, CMD_THEME};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    /// Messages to feed to the session, in order.
    Apply(Vec<Msg>),
    /// Blank line.
    Ignore,
}

/// Interprets one stdin line. Plain text is the URL until the page is
/// scraped, and a question afterwards.
pub fn parse_line(line: &str, phase: Phase) -> Command {
    let trimmed = line.trim();
    match trimmed {
        "" => Command::Ignore,
        CMD_QUIT => Command::Quit,
        CMD_THEME => Command::Apply(vec![Msg::ThemeToggled]),
        CMD_DISMISS => Command::Apply(vec![Msg::NotificationDismissed]),
        text => Command::Apply(submission(text, phase)),
    }
}

fn submission(text: &str, phase: Phase) -> Vec<Msg> {
    match phase {
        Phase::AwaitingScrape | Phase::ScrapeInFlight => {
            vec![Msg::UrlChanged(text.to_owned()), Msg::ScrapeSubmitted]
        }
        Phase::Ready | Phase::AskInFlight => {
            vec![Msg::QuestionChanged(text.to_owned()), Msg::QuestionSubmitted]
        }
    }
}

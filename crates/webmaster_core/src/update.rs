use crate::{
    Effect, Msg, Origin, Phase, Session, Severity, ANSWER_RECEIVED_NOTICE, ASK_FAILURE_MESSAGE,
    SCRAPE_SUCCESS_MESSAGE, SCRAPE_SUCCESS_NOTICE,
};

/// Pure update function: applies a message to the session and returns any effects.
///
/// The phase is the only guard against double submission: a submit that
/// arrives while a request is outstanding produces no effect.
pub fn update(mut session: Session, msg: Msg) -> (Session, Vec<Effect>) {
    let effects = match msg {
        Msg::UrlChanged(text) => {
            match session.phase() {
                Phase::AwaitingScrape | Phase::ScrapeInFlight => session.set_target_url(text),
                // The URL is frozen once the page is scraped.
                Phase::Ready | Phase::AskInFlight => {}
            }
            Vec::new()
        }
        Msg::ScrapeSubmitted => {
            let url = session.target_url().trim();
            if session.phase() != Phase::AwaitingScrape || url.is_empty() {
                return (session, Vec::new());
            }
            let url = url.to_owned();
            session.set_phase(Phase::ScrapeInFlight);
            vec![Effect::Scrape { url }]
        }
        Msg::ScrapeCompleted(result) => {
            if session.phase() != Phase::ScrapeInFlight {
                return (session, Vec::new());
            }
            match result {
                Ok(()) => {
                    session.push_message(Origin::System, SCRAPE_SUCCESS_MESSAGE);
                    session.notify(Severity::Success, SCRAPE_SUCCESS_NOTICE);
                    session.set_phase(Phase::Ready);
                }
                Err(err) => {
                    session.notify(Severity::Error, err.to_string());
                    session.set_phase(Phase::AwaitingScrape);
                }
            }
            Vec::new()
        }
        Msg::QuestionChanged(text) => {
            match session.phase() {
                Phase::Ready | Phase::AskInFlight => session.set_pending_question(text),
                Phase::AwaitingScrape | Phase::ScrapeInFlight => {}
            }
            Vec::new()
        }
        Msg::QuestionSubmitted => {
            let question = session.pending_question().trim();
            if session.phase() != Phase::Ready || question.is_empty() {
                return (session, Vec::new());
            }
            let question = question.to_owned();
            // The user's line goes in before the request leaves.
            session.push_message(Origin::User, question.clone());
            session.set_pending_question(String::new());
            session.set_phase(Phase::AskInFlight);
            vec![Effect::Ask { question }]
        }
        Msg::AskCompleted(result) => {
            if session.phase() != Phase::AskInFlight {
                return (session, Vec::new());
            }
            match result {
                Ok(answer) => {
                    session.push_message(Origin::Assistant, answer);
                    session.notify(Severity::Success, ANSWER_RECEIVED_NOTICE);
                }
                Err(err) => {
                    session.push_message(Origin::Error, ASK_FAILURE_MESSAGE);
                    session.notify(Severity::Error, err.to_string());
                }
            }
            session.set_phase(Phase::Ready);
            Vec::new()
        }
        Msg::NotificationDismissed => {
            session.clear_notification();
            Vec::new()
        }
        Msg::ThemeToggled => {
            session.toggle_theme();
            Vec::new()
        }
        Msg::Tick(elapsed) => {
            session.elapse(elapsed);
            Vec::new()
        }
    };

    (session, effects)
}

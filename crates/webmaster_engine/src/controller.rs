use webmaster_core::{update, Effect, Msg, Session, SessionError, SessionViewModel, Theme};
use webmaster_logging::wm_debug;

use crate::{Backend, EngineEvent};

/// Runs one effect against the backend.
pub async fn execute(backend: &dyn Backend, effect: Effect) -> EngineEvent {
    match effect {
        Effect::Scrape { url } => EngineEvent::ScrapeCompleted(backend.scrape(&url).await),
        Effect::Ask { question } => EngineEvent::AskCompleted(backend.ask(&question).await),
    }
}

/// Collapses a backend result into the completion message the session expects.
/// Transport detail stops here; the backend already logged it.
pub fn completion_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::ScrapeCompleted(result) => {
            Msg::ScrapeCompleted(result.map_err(|_| SessionError::ScrapeFailed))
        }
        EngineEvent::AskCompleted(result) => {
            Msg::AskCompleted(result.map_err(|_| SessionError::AskFailed))
        }
    }
}

/// Owns a [`Session`] and drives it against a [`Backend`], awaiting each call
/// inline. Suited to tests and front ends without their own event loop.
pub struct SessionController<B> {
    backend: B,
    session: Session,
}

impl<B: Backend> SessionController<B> {
    pub fn new(backend: B) -> Self {
        Self::with_session(backend, Session::new())
    }

    pub fn with_session(backend: B, session: Session) -> Self {
        Self { backend, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn view(&self) -> SessionViewModel {
        self.session.view()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Sets the URL and scrapes it. Blank input, or a session that is past the
    /// scrape step, makes this a no-op.
    pub async fn submit_url(&mut self, url: &str) {
        self.dispatch(Msg::UrlChanged(url.to_owned())).await;
        self.dispatch(Msg::ScrapeSubmitted).await;
    }

    /// Sets the draft and asks it. Blank input, or a session that has not
    /// scraped yet, makes this a no-op.
    pub async fn submit_question(&mut self, question: &str) {
        self.dispatch(Msg::QuestionChanged(question.to_owned())).await;
        self.dispatch(Msg::QuestionSubmitted).await;
    }

    pub fn dismiss_notification(&mut self) {
        self.apply(Msg::NotificationDismissed);
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.apply(Msg::ThemeToggled);
        self.session.theme()
    }

    /// Applies a message and runs every effect it produces to completion,
    /// feeding each result back into the session.
    pub async fn dispatch(&mut self, msg: Msg) {
        let mut pending = self.apply(msg);
        while let Some(effect) = pending.pop() {
            wm_debug!("Executing {:?}", effect);
            let event = execute(&self.backend, effect).await;
            pending.extend(self.apply(completion_msg(event)));
        }
    }

    fn apply(&mut self, msg: Msg) -> Vec<Effect> {
        let session = std::mem::take(&mut self.session);
        let (session, effects) = update(session, msg);
        self.session = session;
        effects
    }
}

use std::time::Duration;

use webmaster_core::{
    update, Msg, Phase, Session, SessionError, Theme, ASK_FAILURE_MESSAGE, NOTIFICATION_AUTO_HIDE,
    SCRAPE_FAILURE_NOTICE,
};

fn scraped_session() -> Session {
    let (session, _) = update(Session::new(), Msg::UrlChanged("http://example.com".into()));
    let (session, _) = update(session, Msg::ScrapeSubmitted);
    let (session, _) = update(session, Msg::ScrapeCompleted(Ok(())));
    session
}

#[test]
fn dismiss_clears_only_the_banner() {
    let session = scraped_session();
    let transcript = session.transcript().to_vec();

    let (mut session, effects) = update(session, Msg::NotificationDismissed);

    assert!(effects.is_empty());
    assert!(session.notification().is_none());
    assert_eq!(session.transcript(), transcript.as_slice());
    assert_eq!(session.phase(), Phase::Ready);
    assert!(session.consume_dirty());
}

#[test]
fn banner_hides_after_auto_hide_budget() {
    let (mut session, _) = update(scraped_session(), Msg::Tick(Duration::from_secs(5)));
    assert!(session.notification().is_some());
    session.consume_dirty();

    let (mut session, _) = update(session, Msg::Tick(Duration::from_millis(500)));
    assert!(session.notification().is_some());
    assert!(!session.consume_dirty());

    let (mut session, _) = update(session, Msg::Tick(Duration::from_millis(500)));
    assert!(session.notification().is_none());
    assert!(session.consume_dirty());
}

#[test]
fn new_notification_restarts_the_budget() {
    let (session, _) = update(scraped_session(), Msg::Tick(Duration::from_secs(5)));
    let (session, _) = update(session, Msg::QuestionChanged("Q".into()));
    let (session, _) = update(session, Msg::QuestionSubmitted);
    let (session, _) = update(session, Msg::AskCompleted(Ok("A".into())));

    let notification = session.notification().expect("notification");
    assert_eq!(notification.remaining, NOTIFICATION_AUTO_HIDE);
}

#[test]
fn theme_toggle_flips_and_touches_nothing_else() {
    let session = scraped_session();
    let before = session.view();

    let (session, effects) = update(session, Msg::ThemeToggled);
    let after = session.view();
    assert!(effects.is_empty());
    assert_eq!(after.theme, Theme::Dark);
    assert_eq!(after.transcript, before.transcript);
    assert_eq!(after.phase, before.phase);
    assert_eq!(after.notification, before.notification);

    let (session, _) = update(session, Msg::ThemeToggled);
    assert_eq!(session.theme(), Theme::Light);
}

#[test]
fn repeated_failure_issues_a_fresh_notification() {
    let (session, _) = update(Session::new(), Msg::UrlChanged("http://example.com".into()));
    let (session, _) = update(session, Msg::ScrapeSubmitted);
    let (session, _) = update(session, Msg::ScrapeCompleted(Err(SessionError::ScrapeFailed)));
    let first = session.notification().expect("notification").clone();

    let (session, _) = update(session, Msg::ScrapeSubmitted);
    let (session, _) = update(session, Msg::ScrapeCompleted(Err(SessionError::ScrapeFailed)));
    let second = session.notification().expect("notification");

    assert_eq!(second.message, first.message);
    assert!(second.id > first.id);
}

#[test]
fn error_texts_match_the_published_constants() {
    assert_eq!(SessionError::ScrapeFailed.to_string(), SCRAPE_FAILURE_NOTICE);
    assert_eq!(SessionError::AskFailed.to_string(), ASK_FAILURE_MESSAGE);
}

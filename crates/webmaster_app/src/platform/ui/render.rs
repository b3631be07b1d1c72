use webmaster_core::{Message, Notification, Origin, Phase, SessionViewModel, Severity, Theme};

use super::constants::{palette, Palette, CMD_DISMISS, CMD_QUIT, CMD_THEME, RESET};

/// Turns view-model snapshots into terminal lines, printing only what changed
/// since the previous call.
#[derive(Debug, Default)]
pub struct Renderer {
    shown_messages: usize,
    last_phase: Option<Phase>,
    last_theme: Option<Theme>,
    last_banner: Option<u64>,
}

impl Renderer {
    pub fn header(theme: Theme) -> String {
        let p = palette(theme);
        format!("{}webMaster{RESET}", p.title)
    }

    pub fn render(&mut self, view: &SessionViewModel) -> Vec<String> {
        let p = palette(view.theme);
        let mut lines = Vec::new();

        if self.last_theme.is_some_and(|theme| theme != view.theme) {
            lines.push(format!("{}Theme: {}{RESET}", p.status, theme_label(view.theme)));
        }
        self.last_theme = Some(view.theme);

        for message in view.transcript.iter().skip(self.shown_messages) {
            lines.push(format_message(p, message));
        }
        self.shown_messages = view.transcript.len();

        let banner = view.notification.as_ref().map(|n| n.id);
        if banner != self.last_banner {
            if let Some(notification) = &view.notification {
                lines.push(format_banner(p, notification));
            }
            self.last_banner = banner;
        }

        if self.last_phase != Some(view.phase) {
            lines.push(format!("{}{}{RESET}", p.status, status_text(view)));
            self.last_phase = Some(view.phase);
        }

        lines
    }

    /// Shown when a line arrives while a request is outstanding.
    pub fn busy_hint(view: &SessionViewModel) -> String {
        let p = palette(view.theme);
        format!("{}Still waiting for the backend; try again when it answers.{RESET}", p.status)
    }
}

fn format_message(p: &Palette, message: &Message) -> String {
    let (style, avatar) = match message.origin {
        Origin::User => (p.user, "U"),
        Origin::System | Origin::Assistant => (p.bot, "B"),
        Origin::Error => (p.error, "B"),
    };
    // Multi-line answers keep their breaks, indented under the avatar.
    let body = message.text.replace('\n', "\n   ");
    format!("{style}[{avatar}] {body}{RESET}")
}

fn format_banner(p: &Palette, notification: &Notification) -> String {
    let (style, label) = match notification.severity {
        Severity::Info => (p.info, "info"),
        Severity::Success => (p.success, "ok"),
        Severity::Error => (p.error, "error"),
    };
    format!(
        "{style}({label}) {}{RESET}  {}{CMD_DISMISS} to close{RESET}",
        notification.message, p.status
    )
}

fn status_text(view: &SessionViewModel) -> String {
    match view.phase {
        Phase::AwaitingScrape => format!("Enter a website URL to scrape ({CMD_THEME}, {CMD_QUIT}):"),
        Phase::ScrapeInFlight => format!("Scraping {}...", view.target_url.trim()),
        Phase::Ready => format!("Ask a question ({CMD_THEME}, {CMD_DISMISS}, {CMD_QUIT}):"),
        Phase::AskInFlight => "Waiting for the answer...".to_string(),
    }
}

fn theme_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "light",
        Theme::Dark => "dark",
    }
}

use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use webmaster_core::{update, Msg, Session, Theme};
use webmaster_engine::{BackendSettings, ReqwestBackend};
use webmaster_logging::{wm_info, wm_warn};

use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::ui::input::{parse_line, Command};
use super::ui::render::Renderer;

const TICK_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend_url: String,
    pub log: LogDestination,
    pub theme: Theme,
}

/// Everything the main loop reacts to, funneled through one channel so the
/// session is only ever touched from the main thread.
#[derive(Debug)]
pub enum AppEvent {
    Line(String),
    Core(Msg),
    InputClosed,
}

pub fn run_app(config: AppConfig) -> anyhow::Result<()> {
    logging::initialize(config.log);
    wm_info!("Starting webmaster against {}", config.backend_url);

    let backend = ReqwestBackend::new(BackendSettings::new(&config.backend_url))
        .with_context(|| format!("invalid backend url {:?}", config.backend_url))?;

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let effects = EffectRunner::new(Arc::new(backend), event_tx.clone())
        .context("failed to start the request engine")?;

    spawn_stdin_reader(event_tx.clone());
    // Background tick for notification auto-hide.
    thread::spawn(move || {
        while event_tx.send(AppEvent::Core(Msg::Tick(TICK_INTERVAL))).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });

    let mut session = Session::with_theme(config.theme);
    let mut renderer = Renderer::default();
    let mut out = io::stdout().lock();
    writeln!(out, "{}", Renderer::header(config.theme))?;
    print_lines(&mut out, renderer.render(&session.view()))?;

    let mut input_closed = false;
    while let Ok(event) = event_rx.recv() {
        let msgs = match event {
            AppEvent::Line(line) => match parse_line(&line, session.phase()) {
                Command::Quit => break,
                Command::Ignore => Vec::new(),
                Command::Apply(msgs) => {
                    let view = session.view();
                    if view.busy
                        && msgs.iter().any(|msg| {
                            matches!(msg, Msg::ScrapeSubmitted | Msg::QuestionSubmitted)
                        })
                    {
                        writeln!(out, "{}", Renderer::busy_hint(&view))?;
                    }
                    msgs
                }
            },
            AppEvent::Core(msg) => vec![msg],
            AppEvent::InputClosed => {
                input_closed = true;
                Vec::new()
            }
        };

        for msg in msgs {
            let (next, new_effects) = update(session, msg);
            session = next;
            effects.enqueue(new_effects);
        }

        let view = session.view();
        if session.consume_dirty() {
            print_lines(&mut out, renderer.render(&view))?;
        }

        // Piped input may end before the last answer arrives.
        if input_closed && !view.busy {
            break;
        }
    }

    wm_info!(
        "Session ended with {} transcript entries",
        session.transcript().len()
    );
    Ok(())
}

fn spawn_stdin_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(AppEvent::Line(line)).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    wm_warn!("Failed to read stdin: {}", err);
                    break;
                }
            }
        }
        let _ = tx.send(AppEvent::InputClosed);
    });
}

fn print_lines(out: &mut impl Write, lines: Vec<String>) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

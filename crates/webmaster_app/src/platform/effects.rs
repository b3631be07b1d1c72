use std::io;
use std::sync::{mpsc, Arc};

use webmaster_core::Effect;
use webmaster_engine::{completion_msg, Backend, EngineEvent, EngineHandle, EventSink};
use webmaster_logging::wm_info;

use super::app::AppEvent;

/// Hands effects to the engine thread and routes completions back into the
/// app's event channel as core messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(backend: Arc<dyn Backend>, event_tx: mpsc::Sender<AppEvent>) -> io::Result<Self> {
        let sink = Arc::new(AppEventSink { tx: event_tx });
        let engine = EngineHandle::new(backend, sink)?;
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match &effect {
                Effect::Scrape { url } => {
                    wm_info!("Scrape url_len={} url={}", url.len(), url);
                }
                Effect::Ask { question } => {
                    wm_info!("Ask question_len={}", question.len());
                }
            }
            self.engine.dispatch(effect);
        }
    }
}

struct AppEventSink {
    tx: mpsc::Sender<AppEvent>,
}

impl EventSink for AppEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(AppEvent::Core(completion_msg(event)));
    }
}

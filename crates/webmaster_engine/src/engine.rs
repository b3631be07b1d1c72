use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use webmaster_core::Effect;
use webmaster_logging::{wm_debug, wm_info, wm_warn};

use crate::controller::execute;
use crate::{Backend, EngineEvent};

/// Receives completions from the engine thread.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

/// Executes effects on a dedicated thread with its own tokio runtime, so a
/// synchronous event loop can hand off IO and keep reading input.
///
/// The engine does not serialize calls; callers rely on the session's phase
/// guard to keep at most one in flight.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<Effect>,
}

impl EngineHandle {
    pub fn new(backend: Arc<dyn Backend>, sink: Arc<dyn EventSink>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<Effect>();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("webmaster-engine-io")
            .enable_all()
            .build()?;

        thread::Builder::new()
            .name("webmaster-engine".to_string())
            .spawn(move || {
                while let Ok(effect) = cmd_rx.recv() {
                    let backend = backend.clone();
                    let sink = sink.clone();
                    runtime.spawn(async move {
                        let event = execute(backend.as_ref(), effect).await;
                        sink.emit(event);
                    });
                }
                wm_info!("Engine command channel closed; shutting down");
            })?;

        Ok(Self { cmd_tx })
    }

    pub fn dispatch(&self, effect: Effect) {
        wm_debug!("Dispatching {:?}", effect);
        if let Err(mpsc::SendError(effect)) = self.cmd_tx.send(effect) {
            wm_warn!("Engine thread is gone; dropped {:?}", effect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_after_engine_exit_does_not_panic() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        drop(cmd_rx);
        let engine = EngineHandle { cmd_tx };

        engine.dispatch(Effect::Ask {
            question: "Q".into(),
        });
    }
}

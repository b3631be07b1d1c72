mod app;
mod effects;
mod logging;
mod ui;

pub use app::{run_app, AppConfig};
pub use logging::LogDestination;

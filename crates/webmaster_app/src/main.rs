mod platform;

use clap::Parser;
use platform::{AppConfig, LogDestination};
use webmaster_core::Theme;

/// Scrape a website, then ask questions about it.
#[derive(Parser, Debug)]
#[command(name = "webmaster", version)]
struct Args {
    /// Root of the scrape/ask backend, e.g. http://localhost:5000
    #[arg(long, env = "WEBMASTER_BACKEND_URL")]
    backend_url: String,
    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    log: LogDestination,
    /// Start with the dark palette.
    #[arg(long)]
    dark: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    platform::run_app(AppConfig {
        backend_url: args.backend_url,
        log: args.log,
        theme: if args.dark { Theme::Dark } else { Theme::Light },
    })
}

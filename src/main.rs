use clap::Parser;
use parley::core::config;
use parley::{tui, ModeArg};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "parley", about = "Dual-transport terminal chat client")]
struct Args {
    /// Conversation mode to enter directly, skipping the landing screen
    #[arg(short, long, value_enum)]
    mode: Option<ModeArg>,

    /// Chat server origin, e.g. http://localhost:8000
    #[arg(short, long)]
    server: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to parley.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("parley.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Falling back to default config: {}", e);
        Default::default()
    });
    let resolved = config::resolve(
        &file_config,
        args.server.as_deref(),
        args.mode.map(Into::into),
    );

    log::info!("Parley starting up against {}", resolved.server_base_url);

    tui::run(resolved)
}

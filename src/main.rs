use std::env;
use std::sync::Arc;

use glosstip::cli::{self, Command};
use glosstip::config::LookupConfig;
use glosstip::coordinator::{LookupCoordinator, LookupPlan};
use glosstip::error::{self, GlossError};
use glosstip::logging::{self, LogConfig};
use glosstip::models::Rect;
use glosstip::replay;
use glosstip::sources::HttpClient;
use glosstip::speech::{ProcessSpeech, Speaker};
use glosstip::tooltip::TooltipBoard;

// Roughly one monospace line; only used to anchor one-shot lookups
const CHAR_WIDTH_PX: f64 = 8.0;
const LINE_HEIGHT_PX: f64 = 18.0;

#[tokio::main]
async fn main() -> error::Result<()> {
    // Load .env file if it exists (silently ignore if it doesn't)
    let _ = dotenvy::dotenv();

    let args: Vec<String> = env::args().skip(1).collect();
    let args = match cli::parse_args(&args) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("error: {}", message);
            eprintln!("Run 'glosstip --help' for usage.");
            std::process::exit(2);
        }
    };

    let profile = match args.command {
        Command::Help => {
            cli::print_help();
            return Ok(());
        }
        Command::Version => {
            cli::print_version();
            return Ok(());
        }
        _ => args.profile,
    };

    let _log_guard = logging::init_logging(&LogConfig::from_env())
        .map_err(|e| GlossError::Config(format!("failed to initialize logging: {}", e)))?;
    logging::log_platform_info();

    let config = LookupConfig::from_env(profile)?;
    tracing::debug!(sources = ?config.sources, chained = config.chained, "Configuration loaded");

    let client = HttpClient::new(config.request_timeout())?;
    let plan = LookupPlan::from_config(&config, &client)?;

    let speaker = match &config.speech_command {
        Some(command) => Speaker::new(Arc::new(ProcessSpeech::new(command)), &config.speech_lang),
        None => Speaker::silent(),
    };

    let board = TooltipBoard::new();
    let mut coordinator = LookupCoordinator::new(
        plan,
        speaker,
        Box::new(board.clone()),
        Box::new(board.clone()),
    )
    .with_max_selection_chars(config.max_selection_chars);

    match args.command {
        Command::Lookup { text } => {
            let width = text.chars().count() as f64 * CHAR_WIDTH_PX;
            let rect = Rect::new(0.0, 0.0, width, LINE_HEIGHT_PX);

            if coordinator.on_pointer_up(&text, rect).await.is_none() {
                eprintln!(
                    "Selection ignored: expected 1 to {} characters",
                    config.max_selection_chars
                );
                return Ok(());
            }

            coordinator.settle().await;
            print!("{}", board);
        }
        Command::Replay { path } => {
            let script = std::fs::read_to_string(&path)?;
            let events = replay::parse_script(&script)?;
            tracing::info!(events = events.len(), path = %path, "Replaying script");

            let mut stdout = std::io::stdout();
            let summary = replay::run_replay(&mut coordinator, events, &board, &mut stdout).await?;
            tracing::info!(
                selections = summary.selections,
                ignored = summary.ignored_selections,
                dismissals = summary.dismissals,
                "Replay finished"
            );
        }
        Command::Help | Command::Version => {}
    }

    Ok(())
}

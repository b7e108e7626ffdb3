use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

mod analysis;
mod client;
mod config;
mod models;


use crate::analysis::{AnalysisSettings, HistorySettings, PLACEHOLDER_LYRICS, render_text};
use crate::client::LastFmClient;
use crate::config::load_config;

#[derive(Parser)]
#[command(name = "music-analyzer")]
#[command(about = "Analyze a song using Last.fm metadata, lyric sentiment and a popularity forecast")]
#[command(version)]
struct Args {
    /// Song to search for
    #[arg(required = true, num_args = 1..)]
    query: Vec<String>,

    /// Print the report as JSON instead of text
    #[arg(long = "json")]
    json: bool,

    /// Lyrics to run sentiment analysis on
    #[arg(long = "lyrics", default_value = PLACEHOLDER_LYRICS)]
    lyrics: String,

    /// Play-count drop per step used to reconstruct history
    #[arg(long = "history-step", default_value_t = 1000)]
    history_step: u64,

    /// Number of historical steps to reconstruct (at least 2)
    #[arg(long = "history-len", default_value_t = 5)]
    history_len: usize,

    /// Enable debug logging
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    /// Quiet mode - only warnings and errors are logged
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

fn init_logging(args: &Args) {
    let level = if args.debug {
        Level::DEBUG
    } else if args.quiet {
        Level::WARN
    } else {
        Level::INFO
    };

    // RUST_LOG wins over the command-line flags when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args);

    let query = args.query.join(" ");

    // Load configuration from .env
    let config = load_config()?;

    // Initialize API client
    let client = LastFmClient::new(config);

    let settings = AnalysisSettings {
        history: HistorySettings {
            length: args.history_len,
            step: args.history_step,
        },
        lyrics: args.lyrics.clone(),
    };

    tracing::info!("Analyzing '{query}'");
    let report = match analysis::analyze_song(&client, &query, &settings, chrono::Utc::now())? {
        Some(report) => report,
        None => {
            eprintln!("🚫 Song not found! Try another one.");
            return Err(anyhow::anyhow!("No song found for '{}'", query));
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text(&report));
    }

    Ok(())
}

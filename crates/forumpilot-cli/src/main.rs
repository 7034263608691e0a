mod display;
mod health;

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use forumpilot_ai::ContentAnalyzer;
use forumpilot_core::{Post, Settings};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::health::HealthReport;

#[derive(Parser, Debug)]
#[command(name = "forumpilot", version, about = "Forum post sentiment, toxicity and thread summaries")]
struct Cli {
    /// Serve every request with the local heuristic (same as USE_HUGGINGFACE=false).
    #[arg(long, global = true)]
    heuristic_only: bool,

    /// Use the mock provider (same as USE_MOCK_AI=true).
    #[arg(long, global = true)]
    mock: bool,

    #[arg(long, value_enum, default_value_t = Format::Json, global = true)]
    format: Format,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a text for sentiment and toxicity.
    Analyze { text: String },
    /// Classify a new post and stamp it with an id and timestamp.
    Post {
        #[arg(long)]
        author: String,
        content: String,
    },
    /// Summarize a thread from a JSON array of {author, content} posts.
    Summarize {
        /// Read from this file instead of stdin.
        file: Option<PathBuf>,
    },
    /// Report status and effective configuration.
    Health,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Text,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let settings = apply_flags(Settings::from_env().context("reading configuration")?, &cli);
    tracing::info!("forumpilot v{}", env!("CARGO_PKG_VERSION"));

    let output = match &cli.command {
        Command::Health => {
            let report = HealthReport::from_settings(&settings);
            render(cli.format, &report, || display::health(&report, &settings))?
        }
        Command::Analyze { text } => {
            let analyzer = ContentAnalyzer::from_settings(settings);
            let result = analyzer.analyze(text).await;
            render(cli.format, &result, || display::classification(&result))?
        }
        Command::Post { author, content } => {
            let analyzer = ContentAnalyzer::from_settings(settings);
            let post = analyzer.analyze_post(author, content).await;
            render(cli.format, &post, || display::post(&post))?
        }
        Command::Summarize { file } => {
            let posts = read_posts(file.as_deref())?;
            let analyzer = ContentAnalyzer::from_settings(settings);
            let summary = analyzer.summarize_thread(&posts).await;
            render(cli.format, &summary, || display::summary(&summary))?
        }
    };

    print!("{output}");
    Ok(())
}

/// CLI flags can only switch providers off the default path, never back on.
fn apply_flags(mut settings: Settings, cli: &Cli) -> Settings {
    if cli.heuristic_only {
        settings.use_remote_inference = false;
    }
    if cli.mock {
        settings.use_mock_provider = true;
    }
    settings
}

fn render<T: Serialize>(
    format: Format,
    value: &T,
    text: impl FnOnce() -> String,
) -> anyhow::Result<String> {
    match format {
        Format::Json => Ok(serde_json::to_string_pretty(value)? + "\n"),
        Format::Text => Ok(text()),
    }
}

fn read_posts(file: Option<&std::path::Path>) -> anyhow::Result<Vec<Post>> {
    let raw = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading posts from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading posts from stdin")?;
            buf
        }
    };
    parse_posts(&raw)
}

fn parse_posts(raw: &str) -> anyhow::Result<Vec<Post>> {
    let posts: Vec<Post> =
        serde_json::from_str(raw).context("posts must be a JSON array of {author, content}")?;
    anyhow::ensure!(!posts.is_empty(), "posts array is empty");
    Ok(posts)
}

mod fallback;
mod summary;
mod svg;
mod tui;

use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use streakmap_core::{
    contrast_ratio, ContributionGraph, FileContributionSource, HttpContributionSource,
    LoadGraphUseCase, Theme, WCAG_AA_NORMAL,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "streakmap")]
#[command(about = "Render a contribution heatmap from a JSON data file", long_about = None)]
struct Cli {
    /// Base URL of the site hosting the contribution data
    #[arg(long, global = true)]
    url: Option<String>,

    /// Local JSON file to read instead of fetching (default: ~/.streakmap/contributions.json)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Color theme: light or dark
    #[arg(long, global = true, default_value = "light")]
    theme: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the interactive heatmap (t toggles the theme, q quits)
    Show,
    /// Write the heatmap as an SVG file
    Export {
        /// Output path
        #[arg(long, default_value = "contributions.svg")]
        out: PathBuf,
    },
    /// Print per-month contribution totals
    Summary,
}

fn parse_theme(value: &str) -> Theme {
    match value.to_lowercase().as_str() {
        "d" | "dark" => Theme::Dark,
        _ => Theme::Light,
    }
}

fn setup_logging() {
    // Logs go to stderr so they never corrupt the TUI or piped output.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

fn check_contrast(theme: Theme) {
    let palette = theme.palette();
    match contrast_ratio(palette.text, palette.background) {
        Ok(ratio) if ratio < WCAG_AA_NORMAL => {
            tracing::warn!(
                theme = theme.name(),
                ratio = %format!("{ratio:.2}"),
                "text/background contrast is below WCAG AA (4.5)"
            );
        }
        Ok(ratio) => {
            tracing::debug!(
                theme = theme.name(),
                ratio = %format!("{ratio:.2}"),
                "contrast check passed"
            );
        }
        Err(err) => tracing::warn!(error = %err, "contrast check failed"),
    }
}

async fn load_graph(cli: &Cli) -> Result<Option<ContributionGraph>> {
    let today = Utc::now().date_naive();
    match &cli.url {
        Some(url) => {
            let source = HttpContributionSource::new(url);
            LoadGraphUseCase::new(&source).load(today).await
        }
        None => {
            let source = FileContributionSource::new(cli.file.clone())?;
            LoadGraphUseCase::new(&source).load(today).await
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();
    let cli = Cli::parse();
    let theme = parse_theme(&cli.theme);
    check_contrast(theme);

    let graph = load_graph(&cli).await?;
    if graph.is_none() {
        tracing::warn!("no contribution data available; rendering a decorative placeholder");
    }

    match cli.command {
        Some(Commands::Export { out }) => svg::export(graph.as_ref(), theme, &out)?,
        Some(Commands::Summary) => summary::show_summary(graph.as_ref()),
        Some(Commands::Show) | None => tui::run(graph, theme)?,
    }
    Ok(())
}

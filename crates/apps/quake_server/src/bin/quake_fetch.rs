use std::env;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use reqwest::Client;
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

use feed::{QuakeFeed, USGS_ALL_WEEK_URL};
use overlay::{legend_value, overlay_value, style_quakes};
use symbology::legend_rows;

#[derive(Parser, Debug)]
#[command(author, version, about = "Fetch and style the USGS earthquake feed")]
struct Args {
    /// Feed URL (default: the USGS all-week summary feed)
    #[arg(long)]
    feed_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the live feed and emit styled marker GeoJSON
    Fetch {
        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Style a feed already saved to a local GeoJSON file
    Style {
        /// Path to the feed file
        path: PathBuf,

        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Print the depth legend rows as JSON
    Legend {
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let feed_url = args.feed_url.unwrap_or_else(|| {
        env::var("QUAKE_FEED_URL").unwrap_or_else(|_| USGS_ALL_WEEK_URL.to_string())
    });

    match args.command {
        Command::Fetch { out, pretty } => fetch_and_style(&feed_url, out.as_deref(), pretty).await?,
        Command::Style { path, out, pretty } => style_file(&path, out.as_deref(), pretty)?,
        Command::Legend { pretty } => emit(&legend_value(&legend_rows()), None, pretty)?,
    }

    Ok(())
}

async fn fetch_and_style(
    feed_url: &str,
    out: Option<&Path>,
    pretty: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    info!("fetching {feed_url}");
    let client = Client::new();
    let resp = client.get(feed_url).send().await?;
    if !resp.status().is_success() {
        return Err(format!("feed fetch failed: HTTP {}", resp.status()).into());
    }

    let text = resp.text().await?;
    let feed = QuakeFeed::from_geojson_str(&text)?;
    if let Some(meta) = &feed.metadata {
        info!("feed \"{}\": {} events", meta.title, meta.count);
    }

    emit(&overlay_value(&style_quakes(&feed.quakes)), out, pretty)
}

fn style_file(
    path: &Path,
    out: Option<&Path>,
    pretty: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    let feed = QuakeFeed::from_geojson_str(&text)?;
    emit(&overlay_value(&style_quakes(&feed.quakes)), out, pretty)
}

fn emit(value: &Value, out: Option<&Path>, pretty: bool) -> Result<(), Box<dyn std::error::Error>> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        value.to_string()
    };

    match out {
        Some(path) => {
            std::fs::write(path, text)?;
            info!("wrote {}", path.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}

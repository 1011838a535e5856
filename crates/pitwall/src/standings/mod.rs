use crate::error::Error;
use crate::prelude::*;

use pitwall_core::{RawDriver, StandingsView};

pub mod options;
pub mod show;

/// Standings module app - root command
#[derive(Debug, clap::Parser)]
#[command(name = "standings")]
#[command(about = "Driver standings operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Show the ranked standings table for a season
    #[clap(name = "show")]
    Show(show::ShowOptions),

    /// List the filter options derived from a season's standings
    #[clap(name = "options")]
    Options(options::OptionsOptions),
}

/// Run standings commands
pub async fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::Show(options) => show::handler(options, global).await,
        Commands::Options(options) => options::handler(options, global).await,
    }
}

/// Pitwall configuration from environment variables
#[derive(Debug, Clone)]
pub struct PitwallConfig {
    pub base_url: String,
    pub api_key: String,
}

impl PitwallConfig {
    /// Default upstream standings API base URL
    pub const DEFAULT_BASE_URL: &'static str = "https://pitwall.redbullracing.com/api";

    /// Load configuration from environment variables
    /// Uses PITWALL_BASE_URL with default fallback; PITWALL_API_KEY is required
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self {
            base_url: std::env::var("PITWALL_BASE_URL")
                .unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string()),
            api_key: std::env::var("PITWALL_API_KEY").map_err(|_| {
                Error::Config("PITWALL_API_KEY environment variable not set".to_string())
            })?,
        })
    }
}

/// Create an HTTP client carrying the upstream x-api-key header
pub fn build_client(config: &PitwallConfig) -> Result<reqwest::Client> {
    use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

    let mut headers = HeaderMap::new();
    headers.insert(
        "x-api-key",
        HeaderValue::from_str(&config.api_key)
            .map_err(|e| eyre!("Invalid header value: {}", e))?,
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .map_err(|e| eyre!("Failed to build HTTP client: {}", e))
}

/// Fetch the raw driver standings for a season
pub async fn fetch_standings(
    client: &reqwest::Client,
    config: &PitwallConfig,
    season: u32,
) -> Result<Vec<RawDriver>, Error> {
    let base_url = config.base_url.trim_end_matches('/');
    let url = format!("{base_url}/standings/drivers/{season}");

    let response = client.get(&url).send().await.map_err(|e| {
        Error::Network(format!("Failed to fetch standings for {season}: {e}"))
    })?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Api { status, body });
    }

    response.json::<Vec<RawDriver>>().await.map_err(|e| {
        Error::Network(format!("Failed to parse standings for {season}: {e}"))
    })
}

/// Drive one season load through the view engine
///
/// The loading flag is cleared whatever the fetch outcome, and a response for
/// a superseded request is dropped by the engine rather than applied.
pub async fn load_season(
    view: &mut StandingsView,
    client: &reqwest::Client,
    config: &PitwallConfig,
    season: u32,
) -> Result<()> {
    let token = view.begin_season_load(season);
    match fetch_standings(client, config, token.season()).await {
        Ok(raw) => {
            view.complete_season_load(token, raw);
            Ok(())
        }
        Err(err) => {
            view.fail_season_load(token);
            Err(err.into())
        }
    }
}

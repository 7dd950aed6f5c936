pub mod adaptor;
pub mod client;
pub mod details;
pub mod fetch;
pub mod issue;
pub mod issues;
pub mod provider;
pub mod reference;
pub mod volumes;

#[cfg(test)]
mod testing;

use std::future::Future;
use std::time::Duration;

use comicmeta_core::marvel::auth::Credentials;
use indicatif::{ProgressBar, ProgressStyle};

use self::provider::{MetadataSource, PROPERTY_PRIVATE_KEY, PROPERTY_PUBLIC_KEY};

use crate::prelude::{println, *};

/// Marvel module app - root command
#[derive(Debug, clap::Parser)]
#[command(name = "marvel")]
#[command(about = "Marvel catalog lookups (series, issues, issue details)")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Search volumes (series) by name prefix
    #[clap(name = "volumes")]
    Volumes(volumes::VolumesOptions),

    /// Find a single issue of a series by issue number
    #[clap(name = "issue")]
    Issue(issue::IssueOptions),

    /// List every issue of a series
    #[clap(name = "issues")]
    Issues(issues::IssuesOptions),

    /// Read the details of one comic
    #[clap(name = "details")]
    Details(details::DetailsOptions),

    /// Extract the comic id from a marvel.com issue address
    #[clap(name = "reference")]
    Reference(reference::ReferenceOptions),

    /// Describe the provider and whether its properties are configured
    #[clap(name = "provider")]
    Provider(provider::ProviderOptions),
}

/// Marvel configuration from environment variables
#[derive(Debug, Clone)]
pub struct MarvelConfig {
    pub base_url: String,
    pub public_key: String,
    pub private_key: String,
    pub timeout_secs: u64,
}

impl MarvelConfig {
    /// Default Marvel API gateway
    pub const DEFAULT_BASE_URL: &'static str = comicmeta_core::marvel::DEFAULT_BASE_URL;

    /// Default request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Load configuration from environment variables
    /// Uses MARVEL_PUBLIC_KEY and MARVEL_PRIVATE_KEY for signing
    /// Uses MARVEL_BASE_URL with default fallback
    /// Uses MARVEL_TIMEOUT_SECS with default fallback
    ///
    /// Missing keys are left blank and reported as missing source properties
    /// before any request is made.
    pub fn from_env() -> Result<Self> {
        let timeout_secs = match std::env::var("MARVEL_TIMEOUT_SECS") {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|e| eyre!("Invalid MARVEL_TIMEOUT_SECS '{}': {}", value, e))?,
            Err(_) => Self::DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url: std::env::var("MARVEL_BASE_URL")
                .unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string()),
            public_key: std::env::var("MARVEL_PUBLIC_KEY").unwrap_or_default(),
            private_key: std::env::var("MARVEL_PRIVATE_KEY").unwrap_or_default(),
            timeout_secs,
        })
    }

    /// Apply CLI overrides to the configuration
    pub fn with_overrides(
        mut self,
        base_url: Option<String>,
        public_key: Option<String>,
        private_key: Option<String>,
    ) -> Self {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        if let Some(key) = public_key {
            self.public_key = key;
        }
        if let Some(key) = private_key {
            self.private_key = key;
        }
        self
    }

    /// Source properties for the configured keys; blank keys are left out
    pub fn source(&self) -> MetadataSource {
        let mut source = MetadataSource::new(provider::PUBLISHER_NAME);
        for (name, value) in [
            (PROPERTY_PUBLIC_KEY, &self.public_key),
            (PROPERTY_PRIVATE_KEY, &self.private_key),
        ] {
            if !value.trim().is_empty() {
                source = source.with_property(name, value.clone());
            }
        }
        source
    }
}

/// Create the HTTP client used for Marvel API requests
pub fn create_marvel_client(config: &MarvelConfig) -> Result<reqwest::Client> {
    use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    reqwest::Client::builder()
        .default_headers(headers)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| eyre!("Failed to build HTTP client: {}", e))
}

/// Build the adaptor and credentials for a CLI command
pub fn setup(
    base_url_override: Option<String>,
    global: &crate::Global,
) -> Result<(adaptor::MarvelMetadataAdaptor, Credentials)> {
    let config = MarvelConfig::from_env()?.with_overrides(
        base_url_override,
        global.public_key.clone(),
        global.private_key.clone(),
    );
    let credentials = config.source().credentials()?;
    let client = create_marvel_client(&config)?;
    let adaptor = adaptor::MarvelMetadataAdaptor::new(client::HttpTransport::new(client))
        .with_base_url(config.base_url.clone());

    if global.verbose {
        println!("Using Marvel API at {}", adaptor.base_url());
    }

    Ok((adaptor, credentials))
}

/// Spinner shown while pages are fetched
pub fn new_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Await a command's data task, clearing the spinner on success and failure alike
pub async fn run_with_spinner<T, F>(spinner: &ProgressBar, task: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    let result = task.await;
    spinner.finish_and_clear();
    result
}

/// Render an optional value for table output
pub fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Module entry point
pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Running Marvel module...");
    }

    match app.command {
        Commands::Volumes(options) => volumes::handler(options, global).await,
        Commands::Issue(options) => issue::handler(options, global).await,
        Commands::Issues(options) => issues::handler(options, global).await,
        Commands::Details(options) => details::handler(options, global).await,
        Commands::Reference(options) => reference::handler(options, global).await,
        Commands::Provider(options) => provider::handler(options, global).await,
    }
}

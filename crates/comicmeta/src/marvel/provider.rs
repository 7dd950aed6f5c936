//! Provider descriptor and source properties for the Marvel adaptor

use std::collections::HashMap;

use color_eyre::owo_colors::OwoColorize;
use comicmeta_core::marvel::auth::Credentials;
use comicmeta_core::marvel::reference::is_supported_reference;
use serde::{Deserialize, Serialize};

use crate::prelude::{println, *};

pub const PROVIDER_NAME: &str = "MarvelMetadataAdaptor";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const HOMEPAGE: &str = "https://github.com/comixed/comixed-metadata-marvel";
pub use comicmeta_core::marvel::PUBLISHER_NAME;

pub const PROPERTY_PUBLIC_KEY: &str = "marvel.public-key";
pub const PROPERTY_PRIVATE_KEY: &str = "marvel.private-key";

/// Property names a configured source must define
pub const REQUIRED_PROPERTIES: [&str; 2] = [PROPERTY_PUBLIC_KEY, PROPERTY_PRIVATE_KEY];

/// Whether a web address is an issue page this provider can resolve
pub fn supported_reference(web_address: &str) -> bool {
    is_supported_reference(web_address)
}

/// A configured metadata source: a display name and its property map
#[derive(Debug, Clone, Default)]
pub struct MetadataSource {
    pub name: String,
    pub properties: HashMap<String, String>,
}

impl MetadataSource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: HashMap::new(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn has_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    fn property(&self, key: &str) -> Result<&str, MetadataError> {
        self.properties
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| {
                MetadataError::Configuration(format!(
                    "Source '{}' is missing property {}",
                    self.name, key
                ))
            })
    }

    /// Read the key pair from the source properties
    ///
    /// Blank values are accepted here; they are rejected when a fetch runs.
    pub fn credentials(&self) -> Result<Credentials, MetadataError> {
        Ok(Credentials::new(
            self.property(PROPERTY_PUBLIC_KEY)?,
            self.property(PROPERTY_PRIVATE_KEY)?,
        ))
    }
}

/// Options for describing the provider
#[derive(Debug, clap::Args, Serialize, Deserialize, Clone)]
pub struct ProviderOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct PropertyStatus {
    name: &'static str,
    configured: bool,
}

#[derive(Debug, Serialize)]
struct ProviderOutput {
    name: &'static str,
    version: &'static str,
    homepage: &'static str,
    publisher: &'static str,
    properties: Vec<PropertyStatus>,
}

fn provider_output(source: &MetadataSource) -> ProviderOutput {
    ProviderOutput {
        name: PROVIDER_NAME,
        version: VERSION,
        homepage: HOMEPAGE,
        publisher: PUBLISHER_NAME,
        properties: REQUIRED_PROPERTIES
            .into_iter()
            .map(|name| PropertyStatus {
                name,
                configured: source.has_property(name),
            })
            .collect(),
    }
}

/// Handle the provider command
pub async fn handler(options: ProviderOptions, global: crate::Global) -> Result<()> {
    let config = super::MarvelConfig::from_env()?.with_overrides(
        None,
        global.public_key.clone(),
        global.private_key.clone(),
    );
    let output = provider_output(&config.source());

    if options.json {
        let json_output = serde_json::to_string_pretty(&output)
            .map_err(|e| eyre!("Failed to serialize output: {}", e))?;
        println!("{}", json_output);
        return Ok(());
    }

    println!(
        "\n{} {}\n",
        output.name.bold().cyan(),
        output.version.bright_yellow()
    );

    let mut table = crate::prelude::new_table();
    table.add_row(prettytable::row![
        "Publisher".bold().cyan(),
        output.publisher.bright_magenta().to_string()
    ]);
    table.add_row(prettytable::row![
        "Homepage".bold().cyan(),
        output.homepage.bright_blue().to_string()
    ]);
    for property in &output.properties {
        let status = if property.configured {
            "set".bright_green().to_string()
        } else {
            "missing".bright_red().to_string()
        };
        table.add_row(prettytable::row![property.name.bold().cyan(), status]);
    }
    table.printstd();

    Ok(())
}

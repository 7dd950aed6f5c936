use crate::prelude::{println, *};
use color_eyre::owo_colors::OwoColorize;
use comicmeta_core::marvel::reference::extract_reference_id;
use serde::{Deserialize, Serialize};

use super::provider;

/// Options for resolving a marvel.com issue address
#[derive(Debug, clap::Args, Serialize, Deserialize, Clone)]
pub struct ReferenceOptions {
    /// Issue page address (e.g., "https://www.marvel.com/comics/issue/10766/spider-man")
    #[clap(value_name = "URL")]
    pub url: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize, PartialEq)]
struct ReferenceOutput<'a> {
    provider: &'a str,
    url: &'a str,
    supported: bool,
    reference_id: Option<String>,
}

fn reference_output(url: &str) -> ReferenceOutput<'_> {
    ReferenceOutput {
        provider: provider::PROVIDER_NAME,
        url,
        supported: provider::supported_reference(url),
        reference_id: extract_reference_id(url),
    }
}

/// Handle the reference command
///
/// No request is made, so no credentials are needed.
pub async fn handler(options: ReferenceOptions, _global: crate::Global) -> Result<()> {
    let output = reference_output(&options.url);

    if options.json {
        let json_output = serde_json::to_string_pretty(&output)
            .map_err(|e| eyre!("Failed to serialize output: {}", e))?;
        println!("{}", json_output);
        return Ok(());
    }

    match output.reference_id {
        Some(id) if output.supported => println!("{}", id.bright_yellow()),
        _ => {
            return Err(eyre!(
                "Not a supported Marvel issue address: {}",
                options.url
            ))
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_output_for_issue_page() {
        let url = "https://www.marvel.com/comics/issue/10766/spider-man";

        assert_eq!(
            reference_output(url),
            ReferenceOutput {
                provider: "MarvelMetadataAdaptor",
                url,
                supported: true,
                reference_id: Some("10766".to_string()),
            }
        );
    }

    #[test]
    fn test_reference_output_for_other_site() {
        let output = reference_output("https://example.com/other");

        assert!(!output.supported);
        assert_eq!(output.reference_id, None);
    }
}

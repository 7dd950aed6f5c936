use crate::prelude::{println, *};
use color_eyre::owo_colors::OwoColorize;
use comicmeta_core::marvel::records::IssueRecord;
use indicatif::ProgressBar;
use serde::{Deserialize, Serialize};

use super::or_dash;

/// Options for finding one issue of a series
#[derive(Debug, clap::Args, Serialize, Deserialize, Clone)]
pub struct IssueOptions {
    /// Series (volume) id
    #[clap(value_name = "SERIES_ID")]
    pub series_id: String,

    /// Issue number within the series
    #[clap(value_name = "ISSUE_NUMBER")]
    pub issue_number: String,

    /// Marvel API base URL (overrides MARVEL_BASE_URL env var)
    #[clap(long)]
    pub base_url: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Find one issue through the adaptor
async fn issue_data(
    options: &IssueOptions,
    global: &crate::Global,
    spinner: &ProgressBar,
) -> Result<Option<IssueRecord>> {
    let (adaptor, credentials) = super::setup(options.base_url.clone(), global)?;
    let adaptor = adaptor.with_progress(spinner.clone());

    spinner.set_message(format!(
        "Fetching issue #{} of series {}...",
        options.issue_number, options.series_id
    ));
    let issue = adaptor
        .get_issue(&options.series_id, &options.issue_number, &credentials)
        .await?;

    Ok(issue)
}

/// Handle the issue command
pub async fn handler(options: IssueOptions, global: crate::Global) -> Result<()> {
    let spinner = super::new_spinner();
    let issue = super::run_with_spinner(&spinner, issue_data(&options, &global, &spinner)).await?;

    if options.json {
        let json_output = serde_json::to_string_pretty(&issue)
            .map_err(|e| eyre!("Failed to serialize output: {}", e))?;
        println!("{}", json_output);
        return Ok(());
    }

    let Some(issue) = issue else {
        println!(
            "No issue #{} found in series {}.",
            options.issue_number, options.series_id
        );
        return Ok(());
    };

    println!(
        "\n{} #{} ({})\n",
        issue.volume_name.bold().cyan(),
        options.issue_number.bright_yellow(),
        issue.id.bright_black()
    );

    let mut table = crate::prelude::new_table();
    table.add_row(prettytable::row![
        "Cover Date".bold().cyan(),
        or_dash(issue.cover_date)
    ]);
    table.add_row(prettytable::row![
        "Store Date".bold().cyan(),
        or_dash(issue.store_date)
    ]);
    table.add_row(prettytable::row![
        "Cover".bold().cyan(),
        or_dash(issue.cover_url.as_deref())
    ]);
    table.printstd();

    if let Some(description) = &issue.description {
        println!("\n{}", description);
    }

    Ok(())
}

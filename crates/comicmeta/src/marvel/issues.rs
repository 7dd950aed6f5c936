use crate::prelude::{println, *};
use color_eyre::owo_colors::OwoColorize;
use comicmeta_core::marvel::records::IssueDetailsRecord;
use indicatif::ProgressBar;
use serde::{Deserialize, Serialize};

use super::or_dash;

/// Options for listing every issue of a series
#[derive(Debug, clap::Args, Serialize, Deserialize, Clone)]
pub struct IssuesOptions {
    /// Series (volume) id
    #[clap(value_name = "SERIES_ID")]
    pub series_id: String,

    /// Marvel API base URL (overrides MARVEL_BASE_URL env var)
    #[clap(long)]
    pub base_url: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// List every issue of a series through the adaptor
async fn issues_data(
    options: &IssuesOptions,
    global: &crate::Global,
    spinner: &ProgressBar,
) -> Result<Vec<IssueDetailsRecord>> {
    let (adaptor, credentials) = super::setup(options.base_url.clone(), global)?;
    let adaptor = adaptor.with_progress(spinner.clone());

    spinner.set_message(format!(
        "Fetching issues of series {}...",
        options.series_id
    ));
    let issues = adaptor
        .get_all_issues(&options.series_id, &credentials)
        .await?;

    Ok(issues)
}

/// Handle the issues command
pub async fn handler(options: IssuesOptions, global: crate::Global) -> Result<()> {
    let spinner = super::new_spinner();
    let issues =
        super::run_with_spinner(&spinner, issues_data(&options, &global, &spinner)).await?;

    if options.json {
        let json_output = serde_json::to_string_pretty(&issues)
            .map_err(|e| eyre!("Failed to serialize output: {}", e))?;
        println!("{}", json_output);
        return Ok(());
    }

    println!("\nFound {} issue(s):\n", issues.len().to_string().bold());

    if issues.is_empty() {
        println!("No issues found.");
        return Ok(());
    }

    let mut table = crate::prelude::new_table();
    table.add_row(prettytable::row![
        "ID".bold().cyan(),
        "#".bold().cyan(),
        "Series".bold().cyan(),
        "Volume".bold().cyan(),
        "Cover Date".bold().cyan(),
        "Store Date".bold().cyan()
    ]);

    for issue in &issues {
        table.add_row(prettytable::row![
            issue.source_id.bright_yellow(),
            issue.issue_number.bright_white(),
            issue.series.bright_magenta(),
            issue.volume.bright_green(),
            or_dash(issue.cover_date),
            or_dash(issue.store_date)
        ]);
    }

    table.printstd();

    Ok(())
}

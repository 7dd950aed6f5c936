use crate::prelude::{println, *};
use color_eyre::owo_colors::OwoColorize;
use comicmeta_core::marvel::records::IssueDetailsRecord;
use indicatif::ProgressBar;
use serde::{Deserialize, Serialize};

use super::or_dash;

/// Options for reading one comic
#[derive(Debug, clap::Args, Serialize, Deserialize, Clone)]
pub struct DetailsOptions {
    /// Comic id, or a marvel.com issue address to take the id from
    #[clap(value_name = "COMIC_ID")]
    pub comic_id: String,

    /// Marvel API base URL (overrides MARVEL_BASE_URL env var)
    #[clap(long)]
    pub base_url: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Read one comic through the adaptor
async fn details_data(
    options: &DetailsOptions,
    global: &crate::Global,
    spinner: &ProgressBar,
) -> Result<Option<IssueDetailsRecord>> {
    let (adaptor, credentials) = super::setup(options.base_url.clone(), global)?;
    let adaptor = adaptor.with_progress(spinner.clone());

    let comic_id = adaptor
        .get_reference_id(&options.comic_id)
        .unwrap_or_else(|| options.comic_id.clone());

    spinner.set_message(format!("Fetching comic {}...", comic_id));
    let details = adaptor.get_issue_details(&comic_id, &credentials).await?;

    Ok(details)
}

/// Handle the details command
pub async fn handler(options: DetailsOptions, global: crate::Global) -> Result<()> {
    let spinner = super::new_spinner();
    let details =
        super::run_with_spinner(&spinner, details_data(&options, &global, &spinner)).await?;

    if options.json {
        let json_output = serde_json::to_string_pretty(&details)
            .map_err(|e| eyre!("Failed to serialize output: {}", e))?;
        println!("{}", json_output);
        return Ok(());
    }

    let Some(details) = details else {
        println!("No comic found with id {}.", options.comic_id);
        return Ok(());
    };

    println!("\n{}", "== Comic ==".bold().cyan());
    println!(
        "\n{} ({})\n",
        details.title.bright_white(),
        details.source_id.bright_yellow()
    );

    let mut table = crate::prelude::new_table();
    table.add_row(prettytable::row![
        "Publisher".bold().cyan(),
        details.publisher.bright_magenta().to_string()
    ]);
    table.add_row(prettytable::row![
        "Series".bold().cyan(),
        format!("{} ({})", details.series, details.volume)
    ]);
    table.add_row(prettytable::row![
        "Issue".bold().cyan(),
        details.issue_number.bright_yellow().to_string()
    ]);
    table.add_row(prettytable::row![
        "Cover Date".bold().cyan(),
        or_dash(details.cover_date)
    ]);
    table.add_row(prettytable::row![
        "Store Date".bold().cyan(),
        or_dash(details.store_date)
    ]);
    table.add_row(prettytable::row![
        "Web".bold().cyan(),
        or_dash(details.web_address.as_deref())
    ]);
    table.printstd();

    if !details.credits.is_empty() {
        println!("\n{}", "== Credits ==".bold().cyan());
        let mut credits = crate::prelude::new_table();
        for credit in &details.credits {
            credits.add_row(prettytable::row![
                credit.role.bright_black(),
                credit.name.bright_white()
            ]);
        }
        credits.printstd();
    }

    if let Some(description) = &details.description {
        println!("\n{}", description);
    }

    Ok(())
}

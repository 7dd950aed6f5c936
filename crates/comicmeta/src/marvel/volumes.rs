use crate::prelude::{println, *};
use color_eyre::owo_colors::OwoColorize;
use comicmeta_core::marvel::records::VolumeRecord;
use indicatif::ProgressBar;
use serde::{Deserialize, Serialize};

/// Options for searching Marvel volumes
#[derive(Debug, clap::Args, Serialize, Deserialize, Clone)]
pub struct VolumesOptions {
    /// Series name prefix (e.g., "Spider-Woman")
    #[clap(value_name = "NAME")]
    pub name: String,

    /// Stop after this many volumes (0 = no limit)
    #[arg(long, default_value = "0")]
    pub max_records: usize,

    /// Marvel API base URL (overrides MARVEL_BASE_URL env var)
    #[clap(long)]
    pub base_url: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Search volumes through the adaptor
async fn volumes_data(
    options: &VolumesOptions,
    global: &crate::Global,
    spinner: &ProgressBar,
) -> Result<Vec<VolumeRecord>> {
    let (adaptor, credentials) = super::setup(options.base_url.clone(), global)?;
    let adaptor = adaptor.with_progress(spinner.clone());

    spinner.set_message(format!("Searching volumes for '{}'...", options.name));
    let volumes = adaptor
        .get_volumes(&options.name, options.max_records, &credentials)
        .await?;

    Ok(volumes)
}

/// Handle the volumes command
pub async fn handler(options: VolumesOptions, global: crate::Global) -> Result<()> {
    let spinner = super::new_spinner();
    let volumes =
        super::run_with_spinner(&spinner, volumes_data(&options, &global, &spinner)).await?;

    if options.json {
        let json_output = serde_json::to_string_pretty(&volumes)
            .map_err(|e| eyre!("Failed to serialize output: {}", e))?;
        println!("{}", json_output);
        return Ok(());
    }

    println!("\nFound {} volume(s):\n", volumes.len().to_string().bold());

    if volumes.is_empty() {
        println!("No volumes found.");
        return Ok(());
    }

    let mut table = crate::prelude::new_table();
    table.add_row(prettytable::row![
        "ID".bold().cyan(),
        "Name".bold().cyan(),
        "Start Year".bold().cyan(),
        "Issues".bold().cyan(),
        "Publisher".bold().cyan()
    ]);

    for volume in &volumes {
        table.add_row(prettytable::row![
            volume.id.bright_yellow(),
            volume.name.bright_white(),
            volume.start_year.bright_green(),
            volume.issue_count.to_string(),
            volume.publisher.bright_magenta()
        ]);
    }

    table.printstd();

    Ok(())
}

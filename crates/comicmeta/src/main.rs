#![allow(unused)]

use crate::prelude::*;
use clap::Parser;

mod marvel;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Look up comic series, issues, and issue details from online catalogs"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Marvel API public key (overrides MARVEL_PUBLIC_KEY env var)
    #[clap(long, global = true)]
    public_key: Option<String>,

    /// Marvel API private key (overrides MARVEL_PRIVATE_KEY env var)
    #[clap(long, global = true)]
    private_key: Option<String>,

    /// Whether to display additional information.
    #[clap(
        long,
        env = "COMICMETA_VERBOSE",
        global = true,
        default_value = "false"
    )]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Marvel catalog (gateway.marvel.com) lookups
    Marvel(crate::marvel::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Marvel(sub_app) => crate::marvel::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}

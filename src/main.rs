//! Solarwind - a markdown static site generator with a live-reloading
//! dev server.

mod assets;
mod build;
mod cli;
mod config;
mod content;
mod error;
mod init;
mod logger;
mod markdown;
mod serve;
mod template;
mod watch;

use anyhow::Result;
use build::build_site;
use clap::Parser;
use cli::{Cli, Commands};
use config::SitePaths;
use init::new_site;
use serve::serve_site;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let paths: &'static SitePaths = Box::leak(Box::new(SitePaths::new(&cli.root)));

    match &cli.command {
        Commands::Init { name } => new_site(&cli.root, name.as_deref()),
        Commands::Generate => Ok(build_site(paths)?),
        Commands::Serve { bind, no_watch } => {
            build_site(paths)?;
            serve_site(paths, bind, !no_watch)
        }
    }
}

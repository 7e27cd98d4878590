// src/bin/cli.rs
use color_eyre::eyre::{Result, eyre};

fn main() -> Result<()> {
    color_eyre::install()?;
    dmm_scrape::cli::run().map_err(|e| eyre!("{e}"))
}

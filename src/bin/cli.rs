// src/bin/cli.rs
use review_sentiment::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run()
}

use anyhow::Result;
use balloon_ascension::cli::Cli;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    balloon_ascension::run(cli).await
}

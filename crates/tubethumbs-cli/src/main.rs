//! CLI entry point - the composition root.

use anyhow::Context;
use clap::Parser;

use tubethumbs_cli::{Cli, bootstrap, handlers, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before parsing so env-backed flags see them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    logging::init(cli.verbose).context("failed to install log subscriber")?;

    let outcome = match bootstrap(&cli) {
        Ok(ctx) => handlers::run::execute(&ctx, &cli.playlist_url).await.map(drop),
        Err(e) => Err(e),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }

    Ok(())
}

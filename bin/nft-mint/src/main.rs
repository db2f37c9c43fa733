//! Mint tokens on an owner-gated contract.

use clap::Parser;
use nft_mint::{AlloyTokenClient, Error, display, mint, opts::MintArgs};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = match MintArgs::try_parse() {
        Ok(args) => args,
        Err(err) if err.use_stderr() => {
            err.print().ok();
            return ExitCode::from(Error::EXIT_CODE);
        }
        // --help and --version
        Err(err) => err.exit(),
    };

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            display::error(&err);
            ExitCode::from(Error::EXIT_CODE)
        }
    }
}

async fn run(args: MintArgs) -> Result<(), Error> {
    let config = args.resolve()?;
    let client = AlloyTokenClient::connect(&config).await?;
    mint::run(&client, &config).await?;
    Ok(())
}

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use urlshort::{observability, server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    observability::init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => server::run(args.load()?).await?,
        Commands::Check(args) => {
            let config = args.load()?;
            let chain = server::build_chain(&config).await?;
            println!("ok: {} redirect layers composed", chain.depth());
        }
    }

    Ok(())
}

use std::sync::Arc;

use colored::Colorize;

use rewind_fetch::Retriever;
use rewind_store::{S3ObjectStore, StoreConfig};
use rewind_types::SessionRef;

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Get(args) => cmd_get(args).await,
    }
}

async fn cmd_get(args: GetArgs) -> anyhow::Result<()> {
    let mut config = StoreConfig::default();
    if let Some(bucket) = args.bucket {
        config.bucket = bucket;
    }
    if let Some(region) = args.region {
        config.region = region;
    }

    let session = SessionRef::new(args.project, args.session);
    let store = Arc::new(S3ObjectStore::connect(config).await);
    let retriever = Retriever::new(store);

    let payload = retriever.retrieve(session).await?;
    eprintln!(
        "{} Retrieved session {} ({} bytes)",
        "✓".green().bold(),
        session.to_string().yellow(),
        payload.len()
    );
    println!("{payload}");
    Ok(())
}

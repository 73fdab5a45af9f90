use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "rewind",
    about = "Rewind — session replay payload retrieval",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch and decompress one session's recorded event log
    Get(GetArgs),
}

#[derive(Args)]
pub struct GetArgs {
    /// Project the session belongs to
    #[arg(long)]
    pub project: u64,

    /// Session to retrieve
    #[arg(long)]
    pub session: u64,

    /// Override the configured bucket (process-level, set once at startup)
    #[arg(long)]
    pub bucket: Option<String>,

    /// Override the configured region (process-level, set once at startup)
    #[arg(long)]
    pub region: Option<String>,
}

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "ci-slack-notify",
    about = "Post a CI build result to Slack from environment variables"
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Read build info from the environment and post it to Slack
    Send {
        #[arg(long)]
        dry_run: bool,
    },
    /// Resolve status and delivery mode without sending anything
    Check,
    /// Print the environment variables the tool reads
    Env,
}

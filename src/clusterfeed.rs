use crate::config::DEFAULT_CONFIG_PATH;
use crate::errors::ClusterFeedError;
use crate::get::{get, GetArgs};
use crate::quantity_cmd::{quantity, QuantityArgs};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "clusterfeed")]
#[command(about = "Cluster resource records for placement engines", long_about = None, arg_required_else_help = true, version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(long_about = "List node or pod records")]
    Get(GetArgs),
    #[command(long_about = "Normalize a resource quantity")]
    Quantity(QuantityArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ConfigFileArgs {
    #[arg(long, long_help = "Configuration for clusterfeed.", default_value = DEFAULT_CONFIG_PATH, env = "CLUSTERFEED_CONFIG")]
    pub config: String,
    #[arg(long, long_help = "Name of the kubeconfig context to use.")]
    pub context: Option<String>,
}

async fn clusterfeed_with_args(args: Cli) -> Result<(), ClusterFeedError> {
    match args.command {
        Commands::Get(args) => get(args).await,
        Commands::Quantity(args) => quantity(args),
    }
}

pub async fn clusterfeed() -> Result<(), ClusterFeedError> {
    let args = Cli::parse();
    clusterfeed_with_args(args).await
}

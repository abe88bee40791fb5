use crate::clusterfeed::ConfigFileArgs;
use crate::collector::{collect_nodes, collect_pods};
use crate::config::Config;
use crate::deps::Deps;
use crate::errors::ClusterFeedError;
use crate::util::{render, OutputFormat};
use clap::{Args, Subcommand};
use log::info;

#[derive(Debug, Clone, Args)]
pub struct GetArgs {
    #[command(subcommand)]
    commands: GetCommands,
}

#[derive(Clone, Debug, Args)]
pub struct GetNodeArgs {
    #[command(flatten)]
    config: ConfigFileArgs,
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,
}

#[derive(Clone, Debug, Args)]
pub struct GetPodArgs {
    #[command(flatten)]
    config: ConfigFileArgs,
    #[arg(long, short, long_help = "Only list pods of this namespace")]
    namespace: Option<String>,
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,
}

#[derive(Clone, Debug, Subcommand)]
pub enum GetCommands {
    #[command(alias("node"), long_about = "Node capacity and usage")]
    Nodes(GetNodeArgs),
    #[command(alias("pod"), long_about = "Pod resource requests")]
    Pods(GetPodArgs),
}

pub async fn get(args: GetArgs) -> Result<(), ClusterFeedError> {
    match args.commands {
        GetCommands::Nodes(args) => get_nodes(args).await,
        GetCommands::Pods(args) => get_pods(args).await,
    }
}

async fn connect(args: &ConfigFileArgs, namespace: Option<String>) -> Result<(Deps, Config), ClusterFeedError> {
    let config = Config::load(Some(args.config.clone()))?
        .with_overrides(args.context.clone(), namespace);
    let deps = Deps::connect(&config).await?;
    Ok((deps, config))
}

async fn get_nodes(args: GetNodeArgs) -> Result<(), ClusterFeedError> {
    let (deps, config) = connect(&args.config, None).await?;
    let nodes = collect_nodes(&deps, &config).await?;
    info!("collected {} nodes", nodes.len());
    println!("{}", render(&nodes, args.output)?);
    Ok(())
}

async fn get_pods(args: GetPodArgs) -> Result<(), ClusterFeedError> {
    let (deps, config) = connect(&args.config, args.namespace).await?;
    let pods = collect_pods(&deps, &config).await?;
    info!("collected {} pods", pods.len());
    println!("{}", render(&pods, args.output)?);
    Ok(())
}

use crate::errors::ClusterFeedError;
use crate::resources::quantity::{parse_cpu, parse_memory};
use clap::{Args, Subcommand};

#[derive(Debug, Clone, Args)]
pub struct QuantityArgs {
    #[command(subcommand)]
    command: QuantityCommands,
}

#[derive(Debug, Clone, Subcommand)]
pub enum QuantityCommands {
    #[command(long_about = "Convert a cpu quantity (eg. 250m, 2.5) to cores")]
    Cpu {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    #[command(long_about = "Convert a memory quantity (eg. 512Mi, 1Gi, 524288000) to Mi")]
    Memory {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}

pub fn quantity(args: QuantityArgs) -> Result<(), ClusterFeedError> {
    println!("{}", convert(&args.command)?);
    Ok(())
}

fn convert(command: &QuantityCommands) -> Result<f64, ClusterFeedError> {
    match command {
        QuantityCommands::Cpu { value } => Ok(parse_cpu(value)?),
        QuantityCommands::Memory { value } => Ok(parse_memory(Some(value))),
    }
}

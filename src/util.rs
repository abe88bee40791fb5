use crate::errors::ClusterFeedError;
use clap::ValueEnum;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Debug, Clone, Copy, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

pub fn render<T: Tabled + Serialize>(items: &[T], format: OutputFormat) -> Result<String, ClusterFeedError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(items)?),
        OutputFormat::Table => {
            let mut table = Table::new(items);
            table.with(Style::blank());
            Ok(table.to_string())
        }
    }
}

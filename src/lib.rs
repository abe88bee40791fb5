pub mod cluster_api;
pub mod clusterfeed;
pub mod collector;
pub mod config;
pub mod deps;
pub mod errors;
mod get;
pub mod metrics;
mod quantity_cmd;
pub mod records;
pub mod resources;
pub mod usage;
mod util;

#[cfg(test)]
mod test_helpers;

pub use clusterfeed::clusterfeed;

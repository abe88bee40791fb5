pub mod node_helpers;
pub mod pod_helpers;
pub mod quantity;

use crate::resources::quantity::{parse_cpu, parse_memory};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use log::warn;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resources {
    /// cores
    pub cpu: f64,
    /// mebibytes
    pub memory: f64,
}

/// Parse a cpu quantity, counting anything unreadable as 0 so one bad
/// container spec doesn't drop the whole listing.
pub fn cpu_or_zero(cpu: &str, context: &str) -> f64 {
    match parse_cpu(cpu) {
        Ok(cores) => cores,
        Err(err) => {
            warn!("{}: {}, counting as 0", context, err);
            0.0
        }
    }
}

/// cpu and memory of a `requests`/`capacity` style map, missing keys count as "0"
pub fn quantities(map: Option<&BTreeMap<String, Quantity>>, context: &str) -> Resources {
    let cpu = map
        .and_then(|m| m.get("cpu"))
        .map(|q| q.0.as_str())
        .unwrap_or("0");
    let memory = map
        .and_then(|m| m.get("memory"))
        .map(|q| q.0.as_str())
        .unwrap_or("0");

    Resources {
        cpu: cpu_or_zero(cpu, context),
        memory: parse_memory(Some(memory)),
    }
}

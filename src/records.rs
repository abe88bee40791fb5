use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tabled::Tabled;

/// Capacity and usage of a node, cpu in cores and memory in Mi.
#[derive(Tabled, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[tabled(rename_all = "UPPERCASE")]
pub struct NodeRecord {
    #[tabled(rename = "NAME")]
    pub node_name: String,
    #[tabled(rename = "CPU")]
    pub cpu_capacity: f64,
    #[tabled(rename = "MEMORY (Mi)")]
    pub mem_capacity: f64,
    #[tabled(rename = "CPU USED")]
    pub current_cpu_usage: f64,
    #[tabled(rename = "MEMORY USED (Mi)")]
    pub current_mem_usage: f64,
    /// ms to each peer
    #[tabled(skip)]
    pub network_latency: BTreeMap<String, f64>,
    /// Mbit/s to each peer
    #[tabled(skip)]
    pub network_bandwidth: BTreeMap<String, f64>,
}

/// Resource demand of a pod, summed over its containers.
#[derive(Tabled, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[tabled(rename_all = "UPPERCASE")]
pub struct PodRecord {
    #[tabled(rename = "NAME")]
    pub pod_name: String,
    pub namespace: String,
    #[tabled(rename = "CPU")]
    pub cpu_req: f64,
    #[tabled(rename = "MEMORY (Mi)")]
    pub mem_req: f64,
    #[tabled(rename = "SLA (ms)")]
    pub sla_latency_requirement: f64,
    #[tabled(rename = "DEPLOYMENT", display = "display_deployment")]
    pub deployment_name: Option<String>,
}

fn display_deployment(deployment: &Option<String>) -> String {
    deployment.clone().unwrap_or("<none>".to_string())
}

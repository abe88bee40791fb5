use crate::errors::ClusterFeedError;
use crate::resources::node_helpers::CapacitySource;
use crate::resources::quantity::parse_memory;
use crate::resources::{cpu_or_zero, Resources};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use strum_macros::Display;

pub const DEFAULT_CONFIG_PATH: &str = "~/.clusterfeed/config.yaml";
pub const DEFAULT_SLA_LATENCY_MS: f64 = 200.0;
pub const DEFAULT_SLA_ANNOTATION: &str = "clusterfeed.io/sla-latency-ms";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// kubeconfig context, the current one when absent
    pub context: Option<String>,
    /// namespace for pod listings, all namespaces when absent
    pub namespace: Option<String>,
    pub capacity_source: CapacitySource,
    pub usage_source: UsageSourceKind,
    pub default_usage: DefaultUsage,
    pub sla: SlaConfig,
    pub network: HashMap<String, NetworkConfig>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum UsageSourceKind {
    #[default]
    Static,
    MetricsServer,
}

/// Usage reported for nodes nothing else knows about, as quantity strings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DefaultUsage {
    pub cpu: String,
    pub memory: String,
}

impl Default for DefaultUsage {
    fn default() -> Self {
        DefaultUsage {
            cpu: "0".to_string(),
            memory: "0".to_string(),
        }
    }
}

impl DefaultUsage {
    pub fn resources(&self) -> Resources {
        Resources {
            cpu: cpu_or_zero(&self.cpu, "default usage"),
            memory: parse_memory(Some(&self.memory)),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", default)]
pub struct SlaConfig {
    pub default_latency_ms: f64,
    /// pod annotation holding a per-pod latency target in ms
    pub annotation: String,
    /// latency target in ms keyed by deployment name
    pub deployments: BTreeMap<String, f64>,
}

impl Default for SlaConfig {
    fn default() -> Self {
        SlaConfig {
            default_latency_ms: DEFAULT_SLA_LATENCY_MS,
            annotation: DEFAULT_SLA_ANNOTATION.to_string(),
            deployments: BTreeMap::new(),
        }
    }
}

/// Measured link quality from one node to its peers.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "kebab-case", default)]
pub struct NetworkConfig {
    pub latency_ms: BTreeMap<String, f64>,
    pub bandwidth_mbps: BTreeMap<String, f64>,
}

impl Config {
    /// Load the config at `path` (`~` expanded). A missing file gives the defaults.
    pub fn load(path: Option<String>) -> Result<Config, ClusterFeedError> {
        let path = path.unwrap_or(DEFAULT_CONFIG_PATH.to_string());
        let path = shellexpand::tilde(&path).to_string();

        if path.is_empty() || !Path::new(&path).exists() {
            info!("no config at {:?}, using defaults", path);
            return Ok(Config::default());
        }

        debug!("reading config from {}", path);
        let contents = fs::read_to_string(&path)?;
        Config::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Config, ClusterFeedError> {
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        let config: Config = serde_yaml::from_str(contents)?;
        Ok(config)
    }

    /// command line values win over the file
    pub fn with_overrides(mut self, context: Option<String>, namespace: Option<String>) -> Self {
        if context.is_some() {
            self.context = context;
        }
        if namespace.is_some() {
            self.namespace = namespace;
        }
        self
    }
}

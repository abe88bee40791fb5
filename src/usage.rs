use crate::errors::ClusterFeedError;
use crate::metrics::NodeMetrics;
use crate::resources::Resources;
use crate::resources::quantity::{self, parse_cpu, parse_memory};
use async_trait::async_trait;
use kube::api::{Api, ListParams};
use kube::Client;
use log::{debug, warn};
use std::collections::HashMap;

/// Where current node usage comes from.
#[async_trait]
pub trait UsageSource: Send + Sync {
    /// usage keyed by node name, nodes missing from the map get the default usage
    async fn node_usage(&self) -> Result<HashMap<String, Resources>, ClusterFeedError>;
}

/// Reports nothing, so every node gets the configured default usage.
pub struct StaticUsage {}

#[async_trait]
impl UsageSource for StaticUsage {
    async fn node_usage(&self) -> Result<HashMap<String, Resources>, ClusterFeedError> {
        Ok(HashMap::new())
    }
}

/// Reads live node usage from metrics-server.
pub struct MetricsServerUsage {
    client: Client,
}

impl MetricsServerUsage {
    pub fn new(client: Client) -> Self {
        MetricsServerUsage { client }
    }
}

#[async_trait]
impl UsageSource for MetricsServerUsage {
    async fn node_usage(&self) -> Result<HashMap<String, Resources>, ClusterFeedError> {
        let node_metrics: Api<NodeMetrics> = Api::all(self.client.clone());
        let metrics = node_metrics.list(&ListParams::default()).await?;
        debug!("read metrics for {} nodes", metrics.items.len());

        Ok(metrics
            .items
            .into_iter()
            .filter_map(|m| {
                let name = m.metadata.name.clone()?;
                Some((name, metrics_usage(&m)))
            })
            .collect())
    }
}

/// cpu usage in cores, metrics-server reports nano or micro cores
pub fn parse_usage_cpu(cpu: &str) -> Result<f64, quantity::Error> {
    let trimmed = cpu.trim();
    let scaled = if let Some(nanos) = trimmed.strip_suffix('n') {
        parse_cpu(nanos).map(|v| v / 1e9)
    } else if let Some(micros) = trimmed.strip_suffix('u') {
        parse_cpu(micros).map(|v| v / 1e6)
    } else {
        parse_cpu(trimmed)
    };
    scaled.map_err(|_| quantity::Error::InvalidQuantity("cpu".to_string(), cpu.to_string()))
}

fn metrics_usage(m: &NodeMetrics) -> Resources {
    let name = m.metadata.name.clone().unwrap_or_default();
    let cpu = match parse_usage_cpu(&m.usage.cpu.0) {
        Ok(cpu) => cpu,
        Err(err) => {
            warn!("node {} usage: {}, counting as 0", name, err);
            0.0
        }
    };
    Resources {
        cpu,
        memory: parse_memory(Some(&m.usage.memory.0)),
    }
}

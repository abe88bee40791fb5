use crate::cluster_api::ClusterApi;
use crate::config::{Config, SlaConfig};
use crate::deps::With;
use crate::errors::ClusterFeedError;
use crate::records::{NodeRecord, PodRecord};
use crate::resources::node_helpers::node_capacity;
use crate::resources::pod_helpers::pod_requests;
use crate::resources::Resources;
use crate::usage::UsageSource;
use futures::future::join_all;
use k8s_openapi::api::core::v1::{Node, Pod};
use log::{debug, warn};
use std::collections::{BTreeSet, HashMap};

pub trait CollectDeps: With<dyn ClusterApi> + With<dyn UsageSource> {}

/// List every node and turn it into a record.
pub async fn collect_nodes<D: CollectDeps>(
    deps: &D,
    config: &Config,
) -> Result<Vec<NodeRecord>, ClusterFeedError> {
    let api = With::<dyn ClusterApi>::get(deps);
    let usage_source = With::<dyn UsageSource>::get(deps);

    let nodes = api.list_nodes().await?;
    let usage = match usage_source.node_usage().await {
        Ok(usage) => usage,
        Err(err) => {
            warn!("failed to read node usage, using the default for every node: {}", err);
            HashMap::new()
        }
    };
    Ok(build_node_records(&nodes, &usage, config))
}

/// List the pods of `config.namespace` (all namespaces when unset) and turn them into records.
pub async fn collect_pods<D: CollectDeps>(
    deps: &D,
    config: &Config,
) -> Result<Vec<PodRecord>, ClusterFeedError> {
    let api = With::<dyn ClusterApi>::get(deps);

    let pods = api.list_pods(config.namespace.as_deref()).await?;
    Ok(build_pod_records(api.as_ref(), &pods, config).await)
}

pub fn build_node_records(
    nodes: &[Node],
    usage: &HashMap<String, Resources>,
    config: &Config,
) -> Vec<NodeRecord> {
    let default_usage = config.default_usage.resources();

    nodes
        .iter()
        .filter_map(|n| {
            let Some(name) = n.metadata.name.clone() else {
                warn!("skipping node without a name");
                return None;
            };

            let capacity = node_capacity(n, config.capacity_source);
            let used = usage.get(&name).unwrap_or(&default_usage);
            let network = config.network.get(&name).cloned().unwrap_or_default();

            Some(NodeRecord {
                node_name: name,
                cpu_capacity: capacity.cpu,
                mem_capacity: capacity.memory,
                current_cpu_usage: used.cpu,
                current_mem_usage: used.memory,
                network_latency: network.latency_ms,
                network_bandwidth: network.bandwidth_mbps,
            })
        })
        .collect()
}

pub async fn build_pod_records(api: &dyn ClusterApi, pods: &[Pod], config: &Config) -> Vec<PodRecord> {
    let named: Vec<_> = pods
        .iter()
        .filter(|p| {
            if p.metadata.name.is_none() {
                warn!("skipping pod without a name");
            }
            p.metadata.name.is_some()
        })
        .collect();

    let deployments = replica_set_deployments(api, &named).await;

    named
        .into_iter()
        .map(|p| {
            let deployment =
                replica_set_owners(p).find_map(|key| deployments.get(&key).cloned().flatten());
            let requests = p.spec.as_ref().map(pod_requests).unwrap_or_default();
            PodRecord {
                pod_name: p.metadata.name.clone().unwrap_or_default(),
                namespace: p.metadata.namespace.clone().unwrap_or_default(),
                cpu_req: requests.cpu,
                mem_req: requests.memory,
                sla_latency_requirement: sla_latency(p, deployment.as_deref(), &config.sla),
                deployment_name: deployment,
            }
        })
        .collect()
}

/// (namespace, name) of each ReplicaSet owning the pod
fn replica_set_owners(pod: &Pod) -> impl Iterator<Item = (String, String)> + '_ {
    let namespace = pod.metadata.namespace.clone().unwrap_or("default".to_string());
    pod.metadata
        .owner_references
        .iter()
        .flatten()
        .filter(|o| o.kind == "ReplicaSet")
        .map(move |o| (namespace.clone(), o.name.clone()))
}

/// Deployment of every ReplicaSet owning one of `pods`, each ReplicaSet fetched once.
async fn replica_set_deployments(
    api: &dyn ClusterApi,
    pods: &[&Pod],
) -> HashMap<(String, String), Option<String>> {
    let keys: Vec<_> = pods
        .iter()
        .flat_map(|p| replica_set_owners(p))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let lookups = join_all(
        keys.iter()
            .map(|(namespace, name)| replica_set_deployment(api, name, namespace)),
    )
    .await;

    keys.into_iter().zip(lookups).collect()
}

/// Follow pod -> ReplicaSet -> Deployment owner references.
pub async fn deployment_for_pod(api: &dyn ClusterApi, pod: &Pod) -> Option<String> {
    for (namespace, name) in replica_set_owners(pod) {
        if let Some(deployment) = replica_set_deployment(api, &name, &namespace).await {
            return Some(deployment);
        }
    }
    None
}

async fn replica_set_deployment(api: &dyn ClusterApi, name: &str, namespace: &str) -> Option<String> {
    let replica_set = match api.get_replica_set(name, namespace).await {
        Ok(Some(rs)) => rs,
        Ok(None) => {
            debug!("replica set {}/{} not found", namespace, name);
            return None;
        }
        Err(err) => {
            warn!("failed to get replica set {}/{}: {}", namespace, name, err);
            return None;
        }
    };

    replica_set
        .metadata
        .owner_references
        .unwrap_or_default()
        .into_iter()
        .find(|o| o.kind == "Deployment")
        .map(|o| o.name)
}

/// Latency target in ms: pod annotation, then per deployment, then the default.
pub fn sla_latency(pod: &Pod, deployment: Option<&str>, sla: &SlaConfig) -> f64 {
    let annotated = pod
        .metadata
        .annotations
        .as_ref()
        .and_then(|a| a.get(&sla.annotation));

    if let Some(value) = annotated {
        match value.trim().parse::<f64>() {
            Ok(ms) if ms.is_finite() && ms >= 0.0 => return ms,
            _ => warn!(
                "pod {}: ignoring {} annotation {:?}",
                pod.metadata.name.clone().unwrap_or_default(),
                sla.annotation,
                value
            ),
        }
    }

    deployment
        .and_then(|d| sla.deployments.get(d))
        .copied()
        .unwrap_or(sla.default_latency_ms)
}

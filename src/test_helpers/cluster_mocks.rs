use crate::cluster_api::ClusterApi;
use crate::collector::CollectDeps;
use crate::deps::With;
use crate::errors::ClusterFeedError;
use crate::resources::Resources;
use crate::usage::UsageSource;
use async_trait::async_trait;
use k8s_openapi::api::apps::v1::ReplicaSet;
use k8s_openapi::api::core::v1::{Node, Pod};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct MockClusterApi {
    nodes: Vec<Node>,
    pods: Vec<Pod>,
    replica_sets: Vec<ReplicaSet>,
    fail_lists: bool,
    fail_replica_sets: bool,
    replica_set_gets: Arc<AtomicUsize>,
}

#[allow(unused)]
impl MockClusterApi {
    pub fn with_node(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    pub fn with_pod(mut self, pod: Pod) -> Self {
        self.pods.push(pod);
        self
    }

    pub fn with_replica_set(mut self, replica_set: ReplicaSet) -> Self {
        self.replica_sets.push(replica_set);
        self
    }

    pub fn failing_lists(mut self) -> Self {
        self.fail_lists = true;
        self
    }

    pub fn failing_replica_sets(mut self) -> Self {
        self.fail_replica_sets = true;
        self
    }

    /// number of get_replica_set calls so far, shared between clones
    pub fn replica_set_gets(&self) -> usize {
        self.replica_set_gets.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ClusterApi for MockClusterApi {
    async fn list_nodes(&self) -> Result<Vec<Node>, ClusterFeedError> {
        if self.fail_lists {
            return Err("connection refused".into());
        }
        Ok(self.nodes.clone())
    }

    async fn list_pods(&self, namespace: Option<&str>) -> Result<Vec<Pod>, ClusterFeedError> {
        if self.fail_lists {
            return Err("connection refused".into());
        }
        Ok(self
            .pods
            .iter()
            .filter(|p| namespace.is_none() || p.metadata.namespace.as_deref() == namespace)
            .cloned()
            .collect())
    }

    async fn get_replica_set(
        &self,
        name: &str,
        namespace: &str,
    ) -> Result<Option<ReplicaSet>, ClusterFeedError> {
        self.replica_set_gets.fetch_add(1, Ordering::SeqCst);
        if self.fail_replica_sets {
            return Err("forbidden".into());
        }
        Ok(self
            .replica_sets
            .iter()
            .find(|rs| {
                rs.metadata.name.as_deref() == Some(name)
                    && rs.metadata.namespace.as_deref() == Some(namespace)
            })
            .cloned())
    }
}

#[derive(Clone, Default)]
pub struct MockUsage {
    usage: HashMap<String, Resources>,
    fail: bool,
}

#[allow(unused)]
impl MockUsage {
    pub fn with_usage(mut self, node: &str, cpu: f64, memory: f64) -> Self {
        self.usage.insert(node.to_string(), Resources { cpu, memory });
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

#[async_trait]
impl UsageSource for MockUsage {
    async fn node_usage(&self) -> Result<HashMap<String, Resources>, ClusterFeedError> {
        if self.fail {
            return Err("metrics.k8s.io unavailable".into());
        }
        Ok(self.usage.clone())
    }
}

pub struct TestDeps {
    pub api: MockClusterApi,
    pub usage: MockUsage,
}

impl With<dyn ClusterApi> for TestDeps {
    fn get(&self) -> Box<dyn ClusterApi> {
        Box::new(self.api.clone())
    }
}

impl With<dyn UsageSource> for TestDeps {
    fn get(&self) -> Box<dyn UsageSource> {
        Box::new(self.usage.clone())
    }
}

impl CollectDeps for TestDeps {}

use crate::errors::ClusterFeedError;
use async_trait::async_trait;
use k8s_openapi::api::apps::v1::ReplicaSet;
use k8s_openapi::api::core::v1::{Node, Pod};
use kube::api::{Api, ListParams};
use kube::config::KubeConfigOptions;
use kube::{Client, Config};
use log::debug;

/// The slice of the orchestration API the collector reads from.
#[async_trait]
pub trait ClusterApi: Send + Sync {
    async fn list_nodes(&self) -> Result<Vec<Node>, ClusterFeedError>;
    /// pods in `namespace`, or in every namespace when `None`
    async fn list_pods(&self, namespace: Option<&str>) -> Result<Vec<Pod>, ClusterFeedError>;
    /// `None` when no replica set of that name exists in the namespace
    async fn get_replica_set(
        &self,
        name: &str,
        namespace: &str,
    ) -> Result<Option<ReplicaSet>, ClusterFeedError>;
}

pub struct KubeClusterApi {
    client: Client,
}

impl KubeClusterApi {
    /// In-cluster config when running in a pod, the local kubeconfig otherwise.
    pub async fn new(context: Option<String>) -> Result<Self, ClusterFeedError> {
        let client = Client::try_from(Self::load_config(context).await?)?;
        Ok(Self::from_client(client))
    }

    pub fn from_client(client: Client) -> Self {
        KubeClusterApi { client }
    }

    pub fn client(&self) -> Client {
        self.client.clone()
    }

    async fn load_config(context: Option<String>) -> Result<Config, ClusterFeedError> {
        if context.is_none() {
            match Config::incluster() {
                Ok(config) => return Ok(config),
                Err(err) => debug!("not running in cluster ({}), reading kubeconfig", err),
            }
        }

        let options = KubeConfigOptions {
            context,
            ..Default::default()
        };
        Ok(Config::from_kubeconfig(&options).await?)
    }
}

#[async_trait]
impl ClusterApi for KubeClusterApi {
    async fn list_nodes(&self) -> Result<Vec<Node>, ClusterFeedError> {
        let nodes: Api<Node> = Api::all(self.client.clone());
        let list = nodes.list(&ListParams::default()).await?;
        debug!("listed {} nodes", list.items.len());
        Ok(list.items)
    }

    async fn list_pods(&self, namespace: Option<&str>) -> Result<Vec<Pod>, ClusterFeedError> {
        let pods: Api<Pod> = match namespace {
            Some(ns) => Api::namespaced(self.client.clone(), ns),
            None => Api::all(self.client.clone()),
        };
        let list = pods.list(&ListParams::default()).await?;
        debug!("listed {} pods in {}", list.items.len(), namespace.unwrap_or("all namespaces"));
        Ok(list.items)
    }

    async fn get_replica_set(
        &self,
        name: &str,
        namespace: &str,
    ) -> Result<Option<ReplicaSet>, ClusterFeedError> {
        let replica_sets: Api<ReplicaSet> = Api::namespaced(self.client.clone(), namespace);
        Ok(replica_sets.get_opt(name).await?)
    }
}

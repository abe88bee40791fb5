use crate::cluster_api::{ClusterApi, KubeClusterApi};
use crate::collector::CollectDeps;
use crate::config::{Config, UsageSourceKind};
use crate::errors::ClusterFeedError;
use crate::usage::{MetricsServerUsage, StaticUsage, UsageSource};
use kube::Client;

pub trait With<T: ?Sized> {
    fn get(&self) -> Box<T>;
}

pub struct Deps {
    pub client: Client,
    pub usage_source: UsageSourceKind,
}

impl Deps {
    pub async fn connect(config: &Config) -> Result<Self, ClusterFeedError> {
        let api = KubeClusterApi::new(config.context.clone()).await?;
        Ok(Deps {
            client: api.client(),
            usage_source: config.usage_source,
        })
    }
}

impl With<dyn ClusterApi> for Deps {
    fn get(&self) -> Box<dyn ClusterApi> {
        Box::new(KubeClusterApi::from_client(self.client.clone()))
    }
}

impl With<dyn UsageSource> for Deps {
    fn get(&self) -> Box<dyn UsageSource> {
        match self.usage_source {
            UsageSourceKind::Static => Box::new(StaticUsage {}),
            UsageSourceKind::MetricsServer => Box::new(MetricsServerUsage::new(self.client.clone())),
        }
    }
}

impl CollectDeps for Deps {}

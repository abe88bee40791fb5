use crate::resources::quantity;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClusterFeedError {
    #[error("Error: {0}")]
    String(String),
    #[error("Error: {0}")]
    Anyhow(#[from] anyhow::Error),
    #[error("Error: {0}")]
    IO(#[from] std::io::Error),
    #[error("Error: {0}")]
    Kube(#[from] kube::Error),
    #[error("Error: {0}")]
    KubeConfig(#[from] kube::config::KubeconfigError),
    #[error("Error: {0}")]
    SerdeYaml(#[from] serde_yaml::Error),
    #[error("Error: {0}")]
    SerdeJson(#[from] serde_json::Error),
    #[error("Error: {0}")]
    Quantity(#[from] quantity::Error),
}

impl From<String> for ClusterFeedError {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for ClusterFeedError {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

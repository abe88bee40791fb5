use crate::resources::{quantities, Resources};
use k8s_openapi::api::core::v1::Node;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Which node status map describes a node's size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum CapacitySource {
    #[default]
    Capacity,
    Allocatable,
}

/// cpu (cores) and memory (Mi) of the node according to `source`
pub fn node_capacity(n: &Node, source: CapacitySource) -> Resources {
    let status = n.status.as_ref();
    let map = match source {
        CapacitySource::Capacity => status.and_then(|s| s.capacity.as_ref()),
        CapacitySource::Allocatable => status.and_then(|s| s.allocatable.as_ref()),
    };
    let name = n.metadata.name.clone().unwrap_or_default();
    quantities(map, &format!("node {} {}", name, source))
}

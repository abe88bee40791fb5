use k8s_openapi::api::apps::v1::ReplicaSet;
use k8s_openapi::api::core::v1::{Container, Node, NodeStatus, Pod, PodSpec, ResourceRequirements};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ObjectMeta, OwnerReference};
use k8s_openapi::Metadata;
use std::collections::BTreeMap;

fn quantities(cpu: &str, memory: &str) -> BTreeMap<String, Quantity> {
    BTreeMap::from([
        ("cpu".to_string(), Quantity(cpu.to_string())),
        ("memory".to_string(), Quantity(memory.to_string())),
    ])
}

#[allow(unused)]
pub fn node(name: &str, cpu: &str, memory: &str) -> Node {
    Node {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            ..Default::default()
        },
        spec: None,
        status: Some(NodeStatus {
            capacity: Some(quantities(cpu, memory)),
            ..Default::default()
        }),
    }
}

/// one container per (cpu, memory) request pair
#[allow(unused)]
pub fn pod(name: &str, namespace: &str, requests: &[(&str, &str)]) -> Pod {
    let containers = requests
        .iter()
        .enumerate()
        .map(|(i, (cpu, memory))| Container {
            name: format!("container-{}", i),
            resources: Some(ResourceRequirements {
                requests: Some(quantities(cpu, memory)),
                ..Default::default()
            }),
            ..Default::default()
        })
        .collect();

    Pod {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            ..Default::default()
        },
        spec: Some(PodSpec {
            containers,
            ..Default::default()
        }),
        status: None,
    }
}

#[allow(unused)]
pub fn replica_set(name: &str, namespace: &str) -> ReplicaSet {
    ReplicaSet {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[allow(unused)]
pub fn owned_by<T: Metadata<Ty = ObjectMeta>>(mut obj: T, kind: &str, name: &str) -> T {
    let owners = obj.metadata_mut().owner_references.get_or_insert_with(Vec::new);
    owners.push(OwnerReference {
        api_version: "apps/v1".to_string(),
        kind: kind.to_string(),
        name: name.to_string(),
        uid: format!("{}-uid", name),
        controller: Some(true),
        ..Default::default()
    });
    obj
}

pub trait WithAnnotation {
    #[allow(unused)]
    fn with_annotation(self, key: &str, value: &str) -> Self;
}

impl WithAnnotation for Pod {
    fn with_annotation(mut self, key: &str, value: &str) -> Self {
        self.metadata
            .annotations
            .get_or_insert_with(BTreeMap::new)
            .insert(key.to_string(), value.to_string());
        self
    }
}

use crate::resources::{quantities, Resources};
use k8s_openapi::api::core::v1::PodSpec;

/// sum of the cpu (cores) and memory (Mi) requests of all containers in the pod
pub fn pod_requests(p: &PodSpec) -> Resources {
    p.containers
        .iter()
        .filter_map(|c| {
            let requests = c.resources.as_ref()?.requests.as_ref()?;
            Some(quantities(
                Some(requests),
                &format!("container {}", c.name),
            ))
        })
        .fold(Resources::default(), |acc, r| Resources {
            cpu: acc.cpu + r.cpu,
            memory: acc.memory + r.memory,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use k8s_openapi::api::core::v1::{Container, ResourceRequirements};
    use k8s_openapi::apimachinery::pkg::api::resource::Quantity;

    fn container(name: &str, requests: Option<&[(&str, &str)]>) -> Container {
        Container {
            name: name.to_string(),
            resources: Some(ResourceRequirements {
                requests: requests.map(|r| {
                    r.iter()
                        .map(|(k, v)| (k.to_string(), Quantity(v.to_string())))
                        .collect()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn should_sum_container_requests() {
        let pod_spec = PodSpec {
            containers: vec![
                container("app", Some(&[("cpu", "250m"), ("memory", "512Mi")])),
                container("sidecar", Some(&[("cpu", "1"), ("memory", "1Gi")])),
            ],
            ..Default::default()
        };

        let requests = pod_requests(&pod_spec);
        assert_eq!(requests.cpu, 1.25);
        assert_eq!(requests.memory, 1536.0);
    }

    #[test]
    fn should_count_missing_requests_as_zero() {
        let pod_spec = PodSpec {
            containers: vec![
                container("no-requests", None),
                container("cpu-only", Some(&[("cpu", "500m")])),
                Container {
                    name: "no-resources".to_string(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };

        let requests = pod_requests(&pod_spec);
        assert_eq!(requests.cpu, 0.5);
        assert_eq!(requests.memory, 0.0);
    }

    #[test]
    fn should_zero_invalid_cpu_and_keep_the_rest() {
        let pod_spec = PodSpec {
            containers: vec![
                container("broken", Some(&[("cpu", "lots"), ("memory", "256Mi")])),
                container("fine", Some(&[("cpu", "2"), ("memory", "256Mi")])),
            ],
            ..Default::default()
        };

        let requests = pod_requests(&pod_spec);
        assert_eq!(requests.cpu, 2.0);
        assert_eq!(requests.memory, 512.0);
    }

    #[test]
    fn should_default_empty_pod() {
        assert_eq!(pod_requests(&PodSpec::default()), Resources::default());
    }
}

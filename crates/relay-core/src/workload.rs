use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Name the created workload object carries in the remote system
pub const WORKLOAD_NAME: &str = "demo-nginx-unpriv";

/// Container name inside the workload
pub const CONTAINER_NAME: &str = "nginx-container";

/// Image reference for the single container
pub const IMAGE_NAME: &str = "ghcr.io/nginxinc/nginx-unprivileged";

/// Pull policy identifier as the remote API spells it
pub const IMAGE_PULL_POLICY: &str = "IMAGE_PULL_POLICY_DEFAULT";

/// Resource flavor identifier as the remote API spells it
pub const CONTAINER_FLAVOR: &str = "CONTAINER_FLAVOR_TYPE_TINY";

/// Port the workload advertises inside the cluster
pub const SERVICE_PORT: u16 = 8080;

/// Protocol identifier for the advertised port
pub const SERVICE_PROTOCOL: &str = "PROTOCOL_TCP";

const NUM_REPLICAS: u32 = 1;

/// Empty JSON object (`{}`). The remote API uses these as oneof-style
/// presence markers (e.g. `public`, `all_res`, `v4`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Empty {}

/// Workload document POSTed to the remote config API.
///
/// Every field except `metadata.namespace` is a fixed constant describing one
/// unprivileged nginx deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workload {
    pub metadata: Metadata,
    pub spec: Spec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,

    /// Namespace the workload is created under; the only caller-supplied field
    pub namespace: String,

    pub labels: BTreeMap<String, String>,
    pub annotations: BTreeMap<String, String>,
    pub disable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spec {
    pub service: Service,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub num_replicas: u32,
    pub containers: Vec<Container>,
    pub volumes: Vec<Empty>,
    pub deploy_options: DeployOptions,
    pub advertise_options: AdvertiseOptions,
    pub family: Family,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub name: String,
    pub image: Image,
    pub init_container: bool,
    pub flavor: String,
    pub command: Vec<String>,
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub name: String,

    /// Marks the image as pullable without registry credentials
    pub public: Empty,

    pub pull_policy: String,
}

/// Deploy on all regional edges (`all_res`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeployOptions {
    pub all_res: Empty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvertiseOptions {
    pub advertise_in_cluster: AdvertiseInCluster,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvertiseInCluster {
    pub port: AdvertisePort,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvertisePort {
    pub info: PortInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortInfo {
    pub port: u16,
    pub protocol: String,

    /// Advertise on the same port the container listens on
    pub same_as_port: Empty,
}

/// IPv4-only address family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Family {
    pub v4: Empty,
}

impl Workload {
    /// Build the fixed demo workload document for `namespace`.
    pub fn demo_nginx(namespace: impl Into<String>) -> Self {
        Workload {
            metadata: Metadata {
                name: WORKLOAD_NAME.to_string(),
                namespace: namespace.into(),
                labels: BTreeMap::new(),
                annotations: BTreeMap::new(),
                disable: false,
            },
            spec: Spec {
                service: Service {
                    num_replicas: NUM_REPLICAS,
                    containers: vec![Container {
                        name: CONTAINER_NAME.to_string(),
                        image: Image {
                            name: IMAGE_NAME.to_string(),
                            public: Empty {},
                            pull_policy: IMAGE_PULL_POLICY.to_string(),
                        },
                        init_container: false,
                        flavor: CONTAINER_FLAVOR.to_string(),
                        command: vec![],
                        args: vec![],
                    }],
                    volumes: vec![],
                    deploy_options: DeployOptions { all_res: Empty {} },
                    advertise_options: AdvertiseOptions {
                        advertise_in_cluster: AdvertiseInCluster {
                            port: AdvertisePort {
                                info: PortInfo {
                                    port: SERVICE_PORT,
                                    protocol: SERVICE_PROTOCOL.to_string(),
                                    same_as_port: Empty {},
                                },
                            },
                        },
                    },
                    family: Family { v4: Empty {} },
                },
            },
        }
    }
}

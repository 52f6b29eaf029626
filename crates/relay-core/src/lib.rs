mod endpoint;
mod workload;

pub use endpoint::{application_url, workloads_url};
pub use workload::{
    AdvertiseInCluster, AdvertiseOptions, AdvertisePort, Container, DeployOptions, Empty, Family,
    Image, Metadata, PortInfo, Service, Spec, Workload,
};

pub use workload::{
    CONTAINER_FLAVOR, CONTAINER_NAME, IMAGE_NAME, IMAGE_PULL_POLICY, SERVICE_PORT,
    SERVICE_PROTOCOL, WORKLOAD_NAME,
};

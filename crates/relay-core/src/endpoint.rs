/// URL the workload document is POSTed to.
///
/// Exact concatenation, matching the remote API's path scheme; no
/// normalization of `tenant_url` is performed.
pub fn workloads_url(tenant_url: &str, namespace: &str) -> String {
    format!("{tenant_url}/api/config/namespaces/{namespace}/workloads")
}

/// Console URL the confirmation page links to after a successful creation.
pub fn application_url(tenant_url: &str, namespace: &str) -> String {
    format!(
        "{tenant_url}/web/workspaces/distributed-apps/namespaces/{namespace}/applications/virtual_k8s"
    )
}

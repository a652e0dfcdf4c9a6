use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::{
    link::{Link, names, titles},
    topology::ClusterIdentity,
};

const CLOUD_CONSOLE: &str = "https://console.cloud.google.com";

/// Rendering of a pod or node name the workspace does not know yet.
pub const UNKNOWN_RESOURCE: &str = "undefined";

/// Characters escaped inside the log search query.
const LOG_QUERY: &AsciiSet =
    &CONTROLS.add(b' ').add(b'"').add(b'#').add(b'%').add(b'&').add(b'=').add(b'?');

/// Builds the five operator links for a classified workspace.
///
/// Links come in the fixed order Pod, Node, Workspace Pod Logs, Grafana
/// Workspace, Grafana Node. A missing pod or node name is rendered as
/// [`UNKNOWN_RESOURCE`] in both titles and URLs.
#[must_use]
pub fn assemble(
    identity: &ClusterIdentity,
    base_domain: &str,
    pod_name: Option<&str>,
    node_name: Option<&str>,
) -> Vec<Link> {
    let ClusterIdentity { cluster_name, namespace, cloud_region, project_name } = identity;
    let pod_name = pod_name.unwrap_or(UNKNOWN_RESOURCE);
    let node_name = node_name.unwrap_or(UNKNOWN_RESOURCE);

    let log_query = [
        "resource.type=\"k8s_container\"".to_string(),
        format!("resource.labels.project_id=\"{project_name}\""),
        format!("resource.labels.location=\"{cloud_region}\""),
        format!("resource.labels.cluster_name=\"{cluster_name}\""),
        format!("resource.labels.namespace_name=\"{namespace}\""),
        format!("resource.labels.pod_name=\"{pod_name}\""),
    ]
    .join("\n");
    let log_query = utf8_percent_encode(&log_query, LOG_QUERY);

    vec![
        Link::new(
            names::POD,
            pod_name,
            format!(
                "{CLOUD_CONSOLE}/kubernetes/pod/{cloud_region}/{cluster_name}/{namespace}/{pod_name}/details?project={project_name}"
            ),
        ),
        Link::new(
            names::NODE,
            node_name,
            format!(
                "{CLOUD_CONSOLE}/kubernetes/node/{cloud_region}/{cluster_name}/{node_name}/summary?project={project_name}"
            ),
        ),
        Link::new(
            names::WORKSPACE_POD_LOGS,
            titles::LOGS,
            format!("{CLOUD_CONSOLE}/logs/query;query={log_query}?project={project_name}"),
        ),
        Link::new(
            names::GRAFANA_WORKSPACE,
            titles::POD_METRICS,
            format!(
                "https://monitoring.{base_domain}/d/admin-workspace/admin-workspace?var-workspace={pod_name}"
            ),
        ),
        Link::new(
            names::GRAFANA_NODE,
            titles::NODE_METRICS,
            format!("https://monitoring.{base_domain}/d/admin-node/admin-node?var-node={node_name}"),
        ),
    ]
}

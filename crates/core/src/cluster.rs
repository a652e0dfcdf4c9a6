use serde::{Deserialize, Serialize};

use crate::{
    link::{Link, names, titles},
    template::{PlaceholderValues, render},
};

/// A workspace cluster as supplied by the cluster registry.
///
/// Only the fields this crate reads are modelled; other registry fields are
/// ignored on deserialization.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterRecord {
    /// Matches the region code of the workspaces it runs.
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<LinkTemplateSet>,
}

/// Link templates attached to a cluster record.
///
/// Templates may reference `${podName}`, `${nodeName}` and `${namespace}`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkTemplateSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pod_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pod_logs_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pod_metrics_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_metrics_url: Option<String>,
}

impl LinkTemplateSet {
    /// Number of templates present.
    #[must_use]
    pub fn len(&self) -> usize { self.templates().iter().flatten().count() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Renders one link per template key, in the fixed link order.
    ///
    /// A missing template still yields its link, with an empty URL.
    #[must_use]
    pub fn render(&self, values: &PlaceholderValues) -> Vec<Link> {
        let [pod, node, logs, pod_metrics, node_metrics] =
            self.templates().map(|template| render(template.unwrap_or_default(), values));

        vec![
            Link::new(names::POD, values.pod_name.as_str(), pod),
            Link::new(names::NODE, values.node_name.as_str(), node),
            Link::new(names::WORKSPACE_POD_LOGS, titles::LOGS, logs),
            Link::new(names::GRAFANA_WORKSPACE, titles::POD_METRICS, pod_metrics),
            Link::new(names::GRAFANA_NODE, titles::NODE_METRICS, node_metrics),
        ]
    }

    fn templates(&self) -> [Option<&str>; 5] {
        [
            self.pod_url.as_deref(),
            self.node_url.as_deref(),
            self.pod_logs_url.as_deref(),
            self.pod_metrics_url.as_deref(),
            self.node_metrics_url.as_deref(),
        ]
    }
}

/// Renders the link templates of the cluster named `region`.
///
/// The first record whose name equals `region` wins. Returns an empty list,
/// after logging a warning, when no record matches or the matching record
/// carries no templates.
#[must_use]
pub fn resolve_via_templates(
    region: &str,
    clusters: &[ClusterRecord],
    values: &PlaceholderValues,
) -> Vec<Link> {
    let Some(cluster) = clusters.iter().find(|cluster| cluster.name == region) else {
        tracing::warn!(%region, "No matching cluster found, some links might be broken");
        return Vec::new();
    };

    let Some(templates) = cluster.annotations.as_ref() else {
        tracing::warn!(
            cluster = %cluster.name,
            "No annotations found in the matching cluster, some links might be broken"
        );
        return Vec::new();
    };

    templates.render(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn templates() -> LinkTemplateSet {
        LinkTemplateSet {
            pod_url: Some("https://k8s/${namespace}/${podName}".to_string()),
            node_url: Some("https://k8s/nodes/${nodeName}".to_string()),
            pod_logs_url: Some("https://logs/?q=pod%3D${podName}".to_string()),
            pod_metrics_url: Some("https://grafana/d/ws?var-workspace=${podName}".to_string()),
            node_metrics_url: None,
        }
    }

    fn clusters() -> Vec<ClusterRecord> {
        vec![
            ClusterRecord { name: "us01".to_string(), url: None, annotations: None },
            ClusterRecord {
                name: "eu01".to_string(),
                url: Some("dns:///ws-manager.eu01:8080".to_string()),
                annotations: Some(templates()),
            },
            ClusterRecord {
                name: "eu01".to_string(),
                url: None,
                annotations: Some(LinkTemplateSet::default()),
            },
        ]
    }

    fn values() -> PlaceholderValues {
        PlaceholderValues {
            pod_name: "ws-1".to_string(),
            node_name: "node-a".to_string(),
            namespace: "ns-1".to_string(),
        }
    }

    #[test]
    fn test_resolve_matching_cluster() {
        let links = resolve_via_templates("eu01", &clusters(), &values());

        assert_eq!(
            links,
            vec![
                Link::new("Pod", "ws-1", "https://k8s/ns-1/ws-1"),
                Link::new("Node", "node-a", "https://k8s/nodes/node-a"),
                Link::new("Workspace Pod Logs", "See Logs", "https://logs/?q=pod%3Dws-1"),
                Link::new(
                    "Grafana Workspace",
                    "Pod Metrics",
                    "https://grafana/d/ws?var-workspace=ws-1"
                ),
                Link::new("Grafana Node", "Node Metrics", ""),
            ]
        );
    }

    #[test]
    fn test_resolve_without_matching_cluster() {
        assert!(resolve_via_templates("ap01", &clusters(), &values()).is_empty());
        assert!(resolve_via_templates("eu01", &[], &values()).is_empty());
    }

    #[test]
    fn test_resolve_cluster_without_annotations() {
        assert!(resolve_via_templates("us01", &clusters(), &values()).is_empty());
    }

    #[test]
    fn test_resolve_empty_annotations() {
        let clusters = vec![ClusterRecord {
            name: "eu01".to_string(),
            url: None,
            annotations: Some(LinkTemplateSet::default()),
        }];
        let links = resolve_via_templates("eu01", &clusters, &PlaceholderValues::default());

        assert_eq!(
            links.iter().map(|link| link.name.as_str()).collect::<Vec<_>>(),
            names::ORDERED.to_vec()
        );
        assert!(links.iter().all(|link| link.url.is_empty()));
        assert_eq!(links[0].title, "");
        assert_eq!(links[1].title, "");
    }

    #[test]
    fn test_template_set_len() {
        assert_eq!(templates().len(), 4);
        assert!(LinkTemplateSet::default().is_empty());
    }

    #[test]
    fn test_deserialize_cluster_records() {
        let json = r#"[
            {
                "name": "eu01",
                "url": "dns:///ws-manager:8080",
                "state": "available",
                "score": 100,
                "maxScore": 100,
                "govern": true,
                "annotations": {
                    "podUrl": "https://k8s/${namespace}/${podName}",
                    "nodeMetricsUrl": "https://grafana/d/node?var-node=${nodeName}"
                }
            },
            { "name": "us01" }
        ]"#;

        let clusters: Vec<ClusterRecord> = serde_json::from_str(json).unwrap();

        assert_eq!(clusters.len(), 2);
        let annotations = clusters[0].annotations.as_ref().unwrap();
        assert_eq!(annotations.pod_url.as_deref(), Some("https://k8s/${namespace}/${podName}"));
        assert_eq!(annotations.node_url, None);
        assert_eq!(annotations.len(), 2);
        assert_eq!(clusters[1].annotations, None);
    }
}

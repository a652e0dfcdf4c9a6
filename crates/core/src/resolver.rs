use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    assembler::assemble,
    cluster::{ClusterRecord, resolve_via_templates},
    error::{Error, UnknownStrategySnafu},
    link::Link,
    topology::{Classification, Topology},
    workspace::WorkspaceInstance,
};

/// Produces the operator links of a workspace.
///
/// Resolvers never fail: anything that cannot be resolved yields an empty
/// list, which callers treat as "no links available".
pub trait LinkResolver {
    fn resolve(
        &self,
        workspace: &WorkspaceInstance,
        clusters: Option<&[ClusterRecord]>,
    ) -> Vec<Link>;
}

/// Resolves links from the hard-coded [`Topology`] table.
///
/// Cluster records are ignored.
#[derive(Clone, Copy, Debug)]
pub struct TopologyResolver<'t> {
    topology: &'t Topology,
}

impl<'t> TopologyResolver<'t> {
    #[must_use]
    pub const fn new(topology: &'t Topology) -> Self { Self { topology } }
}

impl Default for TopologyResolver<'static> {
    fn default() -> Self { Self::new(Topology::builtin()) }
}

impl LinkResolver for TopologyResolver<'_> {
    fn resolve(
        &self,
        workspace: &WorkspaceInstance,
        _clusters: Option<&[ClusterRecord]>,
    ) -> Vec<Link> {
        match self.topology.classify(&workspace.ide_url, &workspace.region) {
            Ok(Classification { identity, base_domain }) => assemble(
                &identity,
                &base_domain,
                workspace.status.pod_name.as_deref(),
                workspace.status.node_name.as_deref(),
            ),
            Err(err @ Error::MalformedUrl { .. }) => {
                tracing::error!("{err}");
                Vec::new()
            }
            Err(err) => {
                tracing::warn!("{err}");
                Vec::new()
            }
        }
    }
}

/// Resolves links by rendering the templates attached to the cluster record
/// named after the workspace region.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnnotationResolver;

impl LinkResolver for AnnotationResolver {
    fn resolve(
        &self,
        workspace: &WorkspaceInstance,
        clusters: Option<&[ClusterRecord]>,
    ) -> Vec<Link> {
        let Some(clusters) = clusters else {
            tracing::warn!(region = %workspace.region, "No cluster records available");
            return Vec::new();
        };
        resolve_via_templates(&workspace.region, clusters, &workspace.placeholder_values())
    }
}

/// Selects a resolver by the data the caller has at hand.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Annotations when cluster records are available, topology otherwise.
    #[default]
    Auto,

    Topology,

    Annotations,
}

impl Strategy {
    pub const ALL: [Self; 3] = [Self::Auto, Self::Topology, Self::Annotations];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Topology => "topology",
            Self::Annotations => "annotations",
        }
    }
}

impl LinkResolver for Strategy {
    fn resolve(
        &self,
        workspace: &WorkspaceInstance,
        clusters: Option<&[ClusterRecord]>,
    ) -> Vec<Link> {
        match self {
            Self::Topology => TopologyResolver::default().resolve(workspace, clusters),
            Self::Annotations => AnnotationResolver.resolve(workspace, clusters),
            Self::Auto if clusters.is_some() => AnnotationResolver.resolve(workspace, clusters),
            Self::Auto => TopologyResolver::default().resolve(workspace, clusters),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownStrategySnafu { value: s }.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cluster::LinkTemplateSet, link::names, workspace::WorkspaceStatus};

    fn workspace(ide_url: &str, region: &str) -> WorkspaceInstance {
        WorkspaceInstance {
            ide_url: ide_url.to_string(),
            region: region.to_string(),
            status: WorkspaceStatus {
                pod_name: Some("ws-1".to_string()),
                node_name: Some("node-a".to_string()),
                namespace: Some("ns-1".to_string()),
            },
        }
    }

    fn clusters() -> Vec<ClusterRecord> {
        vec![ClusterRecord {
            name: "eu01".to_string(),
            url: None,
            annotations: Some(LinkTemplateSet {
                pod_url: Some("https://k8s/${namespace}/${podName}".to_string()),
                ..LinkTemplateSet::default()
            }),
        }]
    }

    #[test]
    fn test_topology_resolver() {
        let links = TopologyResolver::default()
            .resolve(&workspace("https://ws-1.ws-eu03.gitpod.io", "eu03"), None);

        assert_eq!(
            links.iter().map(|link| link.name.as_str()).collect::<Vec<_>>(),
            names::ORDERED.to_vec()
        );
        assert!(links[0].url.contains("/prod--gitpod-io--europe-west1--03/default/ws-1/"));
    }

    #[test]
    fn test_topology_resolver_unknown_cluster() {
        let resolver = TopologyResolver::default();

        let unknown_region = workspace("https://ws-1.ws-eu03.gitpod.io", "xx99");
        assert!(resolver.resolve(&unknown_region, None).is_empty());
        assert!(resolver.resolve(&workspace("https://ws-1.example.com", "eu03"), None).is_empty());
    }

    #[test]
    fn test_topology_resolver_malformed_url() {
        let links = TopologyResolver::default().resolve(&workspace("::not a url::", "eu03"), None);
        assert!(links.is_empty());
    }

    #[test]
    fn test_annotation_resolver() {
        let clusters = clusters();
        let links = AnnotationResolver
            .resolve(&workspace("https://ws-1.ws-eu01.example.com", "eu01"), Some(clusters.as_slice()));

        assert_eq!(links.len(), 5);
        assert_eq!(links[0].url, "https://k8s/ns-1/ws-1");
    }

    #[test]
    fn test_annotation_resolver_without_clusters() {
        let links =
            AnnotationResolver.resolve(&workspace("https://ws-1.ws-eu01.example.com", "eu01"), None);
        assert!(links.is_empty());
    }

    #[test]
    fn test_auto_strategy_prefers_annotations() {
        let clusters = clusters();
        let workspace = workspace("https://ws-1.ws-eu03.gitpod.io", "eu03");

        // No record named eu03, so the annotation pipeline resolves nothing.
        assert!(Strategy::Auto.resolve(&workspace, Some(clusters.as_slice())).is_empty());
        assert_eq!(Strategy::Auto.resolve(&workspace, None).len(), 5);
        assert_eq!(Strategy::Topology.resolve(&workspace, Some(clusters.as_slice())).len(), 5);
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("auto".parse::<Strategy>().unwrap(), Strategy::Auto);
        assert_eq!("Topology".parse::<Strategy>().unwrap(), Strategy::Topology);
        assert_eq!("annotations".parse::<Strategy>().unwrap(), Strategy::Annotations);
        assert!(matches!("legacy".parse::<Strategy>(), Err(Error::UnknownStrategy { .. })));

        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>().unwrap(), strategy);
        }
    }
}

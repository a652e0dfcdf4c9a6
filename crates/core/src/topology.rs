//! Hard-coded knowledge of which cluster serves which workspace domain.
//!
//! The table is small and changes rarely, so it is compiled in rather than
//! queried from the cluster registry. It is built once per process and never
//! mutated.

use std::{collections::BTreeMap, sync::LazyLock};

use serde::{Deserialize, Serialize};
use snafu::{OptionExt, ResultExt};
use url::Url;

use crate::error::{self, Error};

const DEFAULT_NAMESPACE: &str = "default";

static BUILTIN: LazyLock<Topology> = LazyLock::new(|| {
    Topology::new()
        .with_regional_cluster(
            "gitpod.io",
            "eu03",
            "prod--gitpod-io--europe-west1--03",
            "europe-west1",
            "gitpod-191109",
        )
        .with_regional_cluster(
            "gitpod.io",
            "us03",
            "prod--gitpod-io--us-west1--03",
            "us-west1",
            "gitpod-191109",
        )
        .with_regional_cluster(
            "gitpod-staging.com",
            "eu02",
            "staging--gitpod-io--eu-west1--02",
            "europe-west1",
            "gitpod-staging",
        )
        .with_regional_cluster(
            "gitpod-staging.com",
            "us02",
            "staging--gitpod-io--us-west1--02",
            "us-west1",
            "gitpod-staging",
        )
        .with_development_cluster(
            "gitpod-dev.com",
            DevelopmentCluster {
                cluster_name: "dev".to_string(),
                namespace_prefix: "staging-".to_string(),
                cloud_region: "europe-west1-b".to_string(),
                project_name: "gitpod-core-dev".to_string(),
            },
        )
});

/// Identity of the cluster and namespace backing a workspace.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterIdentity {
    pub cluster_name: String,

    pub namespace: String,

    pub cloud_region: String,

    pub project_name: String,
}

/// The result of classifying a workspace URL.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Classification {
    pub identity: ClusterIdentity,

    /// Last two labels of the workspace hostname, e.g. `gitpod.io`.
    pub base_domain: String,
}

/// A cluster shared by all development previews of a domain.
///
/// Each preview lives in its own namespace, named after a fragment of the
/// workspace hostname.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DevelopmentCluster {
    pub cluster_name: String,

    pub namespace_prefix: String,

    pub cloud_region: String,

    pub project_name: String,
}

impl DevelopmentCluster {
    fn identity(&self, namespace_fragment: &str) -> ClusterIdentity {
        ClusterIdentity {
            cluster_name: self.cluster_name.clone(),
            namespace: format!("{}{namespace_fragment}", self.namespace_prefix),
            cloud_region: self.cloud_region.clone(),
            project_name: self.project_name.clone(),
        }
    }
}

/// How clusters are laid out behind one base domain.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Domain {
    /// One cluster per region code.
    Regional(BTreeMap<String, ClusterIdentity>),

    /// A single development cluster, regardless of the region code.
    Development(Box<DevelopmentCluster>),
}

/// One row of the topology table, for display.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TopologyEntry {
    pub base_domain: String,

    /// `None` for development domains, which ignore the region code.
    pub region: Option<String>,

    pub cluster_name: String,

    /// The namespace, or the namespace prefix of a development domain.
    pub namespace: String,

    pub cloud_region: String,

    pub project_name: String,
}

/// Lookup table from `(base domain, region code)` to cluster identity.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Topology {
    domains: BTreeMap<String, Domain>,
}

impl Topology {
    #[must_use]
    pub const fn new() -> Self { Self { domains: BTreeMap::new() } }

    /// The process-wide table of known production, staging and development
    /// domains.
    #[must_use]
    pub fn builtin() -> &'static Self { &BUILTIN }

    /// Adds a cluster serving `region` under `base_domain`, in the `default`
    /// namespace.
    ///
    /// A development domain registered under the same `base_domain` is
    /// replaced.
    #[must_use]
    pub fn with_regional_cluster(
        mut self,
        base_domain: &str,
        region: &str,
        cluster_name: &str,
        cloud_region: &str,
        project_name: &str,
    ) -> Self {
        let identity = ClusterIdentity {
            cluster_name: cluster_name.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            cloud_region: cloud_region.to_string(),
            project_name: project_name.to_string(),
        };

        let domain = self
            .domains
            .entry(base_domain.to_string())
            .or_insert_with(|| Domain::Regional(BTreeMap::new()));
        if let Domain::Regional(clusters) = domain {
            drop(clusters.insert(region.to_string(), identity));
        } else {
            *domain = Domain::Regional(BTreeMap::from([(region.to_string(), identity)]));
        }
        self
    }

    /// Registers `base_domain` as a development domain, replacing any
    /// regional clusters registered under it.
    #[must_use]
    pub fn with_development_cluster(
        mut self,
        base_domain: &str,
        cluster: DevelopmentCluster,
    ) -> Self {
        drop(self.domains.insert(base_domain.to_string(), Domain::Development(Box::new(cluster))));
        self
    }

    #[must_use]
    pub fn domain(&self, base_domain: &str) -> Option<&Domain> { self.domains.get(base_domain) }

    /// Looks up the cluster identity for a base domain and region code.
    ///
    /// An unknown domain is a miss regardless of the region code. Development
    /// domains ignore the region code and derive the namespace from
    /// `namespace_fragment`.
    #[must_use]
    pub fn lookup(
        &self,
        base_domain: &str,
        region: &str,
        namespace_fragment: &str,
    ) -> Option<ClusterIdentity> {
        match self.domains.get(base_domain)? {
            Domain::Regional(clusters) => clusters.get(region).cloned(),
            Domain::Development(cluster) => Some(cluster.identity(namespace_fragment)),
        }
    }

    /// Works out which cluster serves the workspace reachable at
    /// `workspace_url`, assigned to the region code `region`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedUrl`] if `workspace_url` cannot be parsed and
    /// [`Error::ClusterNotFound`] if the table has no entry for the domain
    /// and region.
    pub fn classify(&self, workspace_url: &str, region: &str) -> Result<Classification, Error> {
        let url = Url::parse(workspace_url)
            .context(error::MalformedUrlSnafu { url: workspace_url.to_string() })?;
        let (base_domain, namespace_fragment) = split_hostname(url.host_str().unwrap_or_default());

        let identity = self.lookup(&base_domain, region, &namespace_fragment).context(
            error::ClusterNotFoundSnafu { base_domain: base_domain.clone(), region },
        )?;

        tracing::debug!(
            %base_domain,
            %region,
            cluster_name = %identity.cluster_name,
            namespace = %identity.namespace,
            "Classified workspace URL"
        );

        Ok(Classification { identity, base_domain })
    }

    /// All rows of the table, ordered by domain and region code.
    #[must_use]
    pub fn entries(&self) -> Vec<TopologyEntry> {
        self.domains
            .iter()
            .flat_map(|(base_domain, domain)| match domain {
                Domain::Regional(clusters) => clusters
                    .iter()
                    .map(|(region, identity)| TopologyEntry {
                        base_domain: base_domain.clone(),
                        region: Some(region.clone()),
                        cluster_name: identity.cluster_name.clone(),
                        namespace: identity.namespace.clone(),
                        cloud_region: identity.cloud_region.clone(),
                        project_name: identity.project_name.clone(),
                    })
                    .collect::<Vec<_>>(),
                Domain::Development(cluster) => vec![TopologyEntry {
                    base_domain: base_domain.clone(),
                    region: None,
                    cluster_name: cluster.cluster_name.clone(),
                    namespace: format!("{}*", cluster.namespace_prefix),
                    cloud_region: cluster.cloud_region.clone(),
                    project_name: cluster.project_name.clone(),
                }],
            })
            .collect()
    }
}

/// Classifies `workspace_url` against [`Topology::builtin`].
///
/// # Errors
///
/// See [`Topology::classify`].
pub fn classify(workspace_url: &str, region: &str) -> Result<Classification, Error> {
    Topology::builtin().classify(workspace_url, region)
}

/// Splits a hostname into its base domain (the last two labels) and its
/// namespace fragment (the fourth label from the end).
///
/// The fragment is empty for hostnames with fewer than four labels.
///
/// ```
/// use podlinks_core::split_hostname;
///
/// let (base_domain, fragment) = split_hostname("abc.ws-dev.my-branch.staging.gitpod-dev.com");
/// assert_eq!(base_domain, "gitpod-dev.com");
/// assert_eq!(fragment, "my-branch");
/// ```
#[must_use]
pub fn split_hostname(hostname: &str) -> (String, String) {
    let labels = hostname.split('.').collect::<Vec<_>>();
    let base_domain = labels[labels.len().saturating_sub(2)..].join(".");
    let namespace_fragment =
        labels.len().checked_sub(4).map(|index| labels[index]).unwrap_or_default().to_string();
    (base_domain, namespace_fragment)
}

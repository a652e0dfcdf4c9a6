use serde::{Deserialize, Serialize};

/// A named deep-link shown to an operator.
///
/// A link has no identity beyond its position in the list a resolver
/// produces.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Link {
    pub name: String,

    pub title: String,

    pub url: String,
}

impl Link {
    pub fn new<N, T, U>(name: N, title: T, url: U) -> Self
    where
        N: Into<String>,
        T: Into<String>,
        U: Into<String>,
    {
        Self { name: name.into(), title: title.into(), url: url.into() }
    }
}

/// Link names, in the order every resolver emits them.
pub mod names {
    pub const POD: &str = "Pod";
    pub const NODE: &str = "Node";
    pub const WORKSPACE_POD_LOGS: &str = "Workspace Pod Logs";
    pub const GRAFANA_WORKSPACE: &str = "Grafana Workspace";
    pub const GRAFANA_NODE: &str = "Grafana Node";

    pub const ORDERED: [&str; 5] =
        [POD, NODE, WORKSPACE_POD_LOGS, GRAFANA_WORKSPACE, GRAFANA_NODE];
}

/// Fixed titles of the links whose title does not name a resource.
pub(crate) mod titles {
    pub const LOGS: &str = "See Logs";
    pub const POD_METRICS: &str = "Pod Metrics";
    pub const NODE_METRICS: &str = "Node Metrics";
}

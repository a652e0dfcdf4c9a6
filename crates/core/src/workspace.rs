use serde::{Deserialize, Serialize};

use crate::template::PlaceholderValues;

/// A running workspace instance, as exposed by the workspace store.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceInstance {
    /// Externally reachable URL of the workspace.
    pub ide_url: String,

    /// Region code of the cluster the workspace runs on, e.g. `eu03`.
    pub region: String,

    #[serde(default)]
    pub status: WorkspaceStatus,
}

/// Last known scheduling state. Every field is absent until the workspace
/// has been scheduled.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pod_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl WorkspaceInstance {
    /// Values for rendering link templates, with absent fields as `""`.
    #[must_use]
    pub fn placeholder_values(&self) -> PlaceholderValues {
        let WorkspaceStatus { pod_name, node_name, namespace } = &self.status;
        PlaceholderValues {
            pod_name: pod_name.clone().unwrap_or_default(),
            node_name: node_name.clone().unwrap_or_default(),
            namespace: namespace.clone().unwrap_or_default(),
        }
    }
}

use std::path::Path;

use serde::de::DeserializeOwned;
use snafu::ResultExt;
use tokio::io::AsyncReadExt;

use crate::cli::error::{self, Error};

/// Path that stands for standard input.
const STDIN_PATH: &str = "-";

/// Reads a JSON or YAML document from `path`, or from standard input when
/// `path` is [`STDIN_PATH`].
///
/// Documents starting with `{` or `[` are parsed as JSON, anything else as
/// YAML.
pub async fn read_document<T>(path: &Path) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    let data = if path == Path::new(STDIN_PATH) {
        let mut data = Vec::new();
        let _ = tokio::io::stdin().read_to_end(&mut data).await.context(error::ReadStdinSnafu)?;
        data
    } else {
        tokio::fs::read(path).await.context(error::ReadFileSnafu { file_path: path })?
    };

    tracing::debug!(path = %path.display(), bytes = data.len(), "Read document");
    parse_document(path, &data)
}

fn parse_document<T>(path: &Path, data: &[u8]) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    if data.trim_ascii_start().first().is_some_and(|b| matches!(b, b'{' | b'[')) {
        serde_json::from_slice(data).context(error::ParseJsonDocumentSnafu { file_path: path })
    } else {
        serde_yaml::from_slice(data).context(error::ParseYamlDocumentSnafu { file_path: path })
    }
}

#[cfg(test)]
mod tests {
    use podlinks_core::{ClusterRecord, WorkspaceInstance};

    use super::*;

    #[test]
    fn test_parse_json_workspace() {
        let data = br#"
            {
            	"ideUrl": "https://ws-1.ws-eu03.gitpod.io",
            	"region": "eu03",
            	"status": { "podName": "ws-1" }
            }"#;
        let workspace: WorkspaceInstance = parse_document(Path::new("ws.json"), data).unwrap();

        assert_eq!(workspace.region, "eu03");
        assert_eq!(workspace.status.pod_name.as_deref(), Some("ws-1"));
    }

    #[test]
    fn test_parse_yaml_clusters() {
        let data = b"
- name: eu01
  annotations:
    podUrl: https://k8s/${namespace}/${podName}
- name: us01
";
        let clusters: Vec<ClusterRecord> = parse_document(Path::new("clusters.yaml"), data).unwrap();

        assert_eq!(clusters.len(), 2);
        assert!(clusters[0].annotations.is_some());
    }

    #[test]
    fn test_parse_invalid_document() {
        let result = parse_document::<WorkspaceInstance>(Path::new("ws.json"), b"{ \"ideUrl\": ");
        assert!(matches!(result, Err(Error::ParseJsonDocument { .. })));

        let result = parse_document::<WorkspaceInstance>(Path::new("ws.yaml"), b"region: eu03\n");
        assert!(matches!(result, Err(Error::ParseYamlDocument { .. })));
    }
}

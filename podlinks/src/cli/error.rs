use std::path::PathBuf;

use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("{source}"))]
    Configuration { source: crate::config::Error },

    #[snafu(display("Failed to write to stdout, error: {source}"))]
    WriteStdout { source: std::io::Error },

    #[snafu(display("Failed to write to stderr, error: {source}"))]
    WriteStderr { source: std::io::Error },

    #[snafu(display("Failed to read from stdin, error: {source}"))]
    ReadStdin { source: std::io::Error },

    #[snafu(display("Failed to read {}, error: {source}", file_path.display()))]
    ReadFile { file_path: PathBuf, source: std::io::Error },

    #[snafu(display("Failed to parse JSON document {}, error: {source}", file_path.display()))]
    ParseJsonDocument { file_path: PathBuf, source: serde_json::Error },

    #[snafu(display("Failed to parse YAML document {}, error: {source}", file_path.display()))]
    ParseYamlDocument { file_path: PathBuf, source: serde_yaml::Error },

    #[snafu(display("Either a workspace file or both --url and --region must be provided"))]
    MissingWorkspace,

    #[snafu(display(
        "No cluster records given, pass a file or set `clustersFile` in the configuration"
    ))]
    MissingClustersFile,

    #[snafu(display("Failed to serialize links, error: {source}"))]
    SerializeLinks { source: serde_json::Error },

    #[snafu(display("Failed to create tokio runtime, error: {source}"))]
    InitializeTokioRuntime { source: std::io::Error },
}

impl From<crate::config::Error> for Error {
    fn from(source: crate::config::Error) -> Self { Self::Configuration { source } }
}

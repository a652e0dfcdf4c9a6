use std::path::PathBuf;

use clap::Args;
use podlinks_core::{
    ClusterRecord, Link, LinkResolver, Strategy, WorkspaceInstance, WorkspaceStatus,
};
use snafu::ResultExt;
use tokio::io::AsyncWriteExt;

use crate::{
    cli::{
        error::{self, Error},
        internal::read_document,
    },
    config::{Config, OutputFormat},
    ui::table::LinkListExt,
};

#[derive(Args, Clone)]
pub struct ResolveCommand {
    #[arg(
        short,
        long = "workspace",
        value_name = "FILE",
        conflicts_with_all = ["url", "region", "pod_name", "node_name", "namespace"],
        help = "JSON or YAML file describing the workspace instance, '-' reads from stdin."
    )]
    pub workspace_file: Option<PathBuf>,

    #[arg(
        long,
        required_unless_present = "workspace_file",
        help = "Externally reachable URL of the workspace."
    )]
    pub url: Option<String>,

    #[arg(
        long,
        required_unless_present = "workspace_file",
        help = "Region code of the cluster running the workspace, e.g. eu03."
    )]
    pub region: Option<String>,

    #[arg(long, help = "Name of the pod backing the workspace.")]
    pub pod_name: Option<String>,

    #[arg(long, help = "Name of the node the workspace pod is scheduled on.")]
    pub node_name: Option<String>,

    #[arg(long, help = "Namespace of the workspace pod.")]
    pub namespace: Option<String>,

    #[arg(
        long = "clusters",
        value_name = "FILE",
        help = "JSON or YAML list of cluster records carrying link templates. Defaults to \
                `clustersFile` from the configuration."
    )]
    pub clusters_file: Option<PathBuf>,

    #[arg(
        short,
        long,
        help = "Resolution strategy: auto, topology or annotations. Defaults to the configured \
                strategy."
    )]
    pub strategy: Option<Strategy>,

    #[arg(short, long, help = "Output format: table or json.")]
    pub output: Option<OutputFormat>,
}

impl ResolveCommand {
    pub async fn run(self, config: Config) -> Result<(), Error> {
        let Self {
            workspace_file,
            url,
            region,
            pod_name,
            node_name,
            namespace,
            clusters_file,
            strategy,
            output,
        } = self;

        let workspace = match (workspace_file, url, region) {
            (Some(path), ..) => read_document::<WorkspaceInstance>(&path).await?,
            (None, Some(ide_url), Some(region)) => WorkspaceInstance {
                ide_url,
                region,
                status: WorkspaceStatus { pod_name, node_name, namespace },
            },
            _ => return error::MissingWorkspaceSnafu.fail(),
        };

        let clusters = match clusters_file.or(config.clusters_file) {
            Some(path) => Some(read_document::<Vec<ClusterRecord>>(&path).await?),
            None => None,
        };

        let strategy = strategy.unwrap_or(config.default_strategy);
        tracing::debug!(
            %strategy,
            region = %workspace.region,
            clusters = clusters.as_ref().map(Vec::len),
            "Resolving workspace links"
        );
        let links = strategy.resolve(&workspace, clusters.as_deref());

        write_links(&links, output.unwrap_or(config.default_output)).await
    }
}

async fn write_links(links: &[Link], output: OutputFormat) -> Result<(), Error> {
    let rendered = match output {
        OutputFormat::Json => {
            serde_json::to_string_pretty(links).context(error::SerializeLinksSnafu)?
        }
        OutputFormat::Table if links.is_empty() => {
            return tokio::io::stderr()
                .write_all(b"No links available for this workspace\n")
                .await
                .context(error::WriteStderrSnafu);
        }
        OutputFormat::Table => links.render_table(),
    };

    let mut stdout = tokio::io::stdout();
    stdout.write_all(rendered.as_bytes()).await.context(error::WriteStdoutSnafu)?;
    stdout.write_u8(b'\n').await.context(error::WriteStdoutSnafu)
}

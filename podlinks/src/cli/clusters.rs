use std::path::PathBuf;

use clap::Args;
use podlinks_core::ClusterRecord;
use snafu::{OptionExt, ResultExt};
use tokio::io::AsyncWriteExt;

use crate::{
    cli::{
        error::{self, Error},
        internal::read_document,
    },
    config::Config,
    ui::table::ClusterListExt,
};

#[derive(Args, Clone)]
pub struct ClustersCommand {
    #[arg(
        value_name = "FILE",
        help = "JSON or YAML list of cluster records, '-' reads from stdin. Defaults to \
                `clustersFile` from the configuration."
    )]
    pub clusters_file: Option<PathBuf>,
}

impl ClustersCommand {
    pub async fn run(self, config: Config) -> Result<(), Error> {
        let path = self
            .clusters_file
            .or(config.clusters_file)
            .context(error::MissingClustersFileSnafu)?;
        let clusters = read_document::<Vec<ClusterRecord>>(&path).await?;

        let mut stdout = tokio::io::stdout();
        stdout
            .write_all(clusters.render_table().as_bytes())
            .await
            .context(error::WriteStdoutSnafu)?;
        stdout.write_u8(b'\n').await.context(error::WriteStdoutSnafu)
    }
}

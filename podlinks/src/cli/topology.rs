use clap::Args;
use podlinks_core::Topology;
use snafu::ResultExt;
use tokio::io::AsyncWriteExt;

use crate::{
    cli::error::{self, Error},
    ui::table::TopologyExt,
};

/// Prints the built-in domain and region table used by the topology
/// strategy.
#[derive(Args, Clone)]
pub struct TopologyCommand {}

impl TopologyCommand {
    pub async fn run(self) -> Result<(), Error> {
        let mut stdout = tokio::io::stdout();
        stdout
            .write_all(Topology::builtin().entries().render_table().as_bytes())
            .await
            .context(error::WriteStdoutSnafu)?;
        stdout.write_u8(b'\n').await.context(error::WriteStdoutSnafu)
    }
}

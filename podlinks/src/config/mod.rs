mod error;
mod output_format;

use std::path::{Path, PathBuf};

use podlinks_core::Strategy;
use resolve_path::PathResolveExt;
use serde::{Deserialize, Serialize};
use snafu::ResultExt;

pub use self::{error::Error, output_format::OutputFormat};

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Strategy used when `--strategy` is not given.
    #[serde(default)]
    pub default_strategy: Strategy,

    #[serde(default)]
    pub default_output: OutputFormat,

    /// Cluster records used when `--clusters` is not given.
    pub clusters_file: Option<PathBuf>,

    #[serde(default = "podlinks_cli::config::LogConfig::default")]
    pub log: podlinks_cli::config::LogConfig,
}

impl Config {
    /// Returns the first existing configuration file among the default
    /// location and the fallback directories.
    pub fn search_config_file_path() -> Option<PathBuf> {
        std::iter::once(Self::default_path())
            .chain(podlinks_base::fallback_project_config_directories().into_iter().map(
                |mut path| {
                    path.push(podlinks_base::CLI_CONFIG_NAME);
                    path
                },
            ))
            .find(|path| path.try_exists().unwrap_or(false))
    }

    #[inline]
    pub fn default_path() -> PathBuf {
        [podlinks_base::PROJECT_CONFIG_DIR.to_path_buf(), PathBuf::from(podlinks_base::CLI_CONFIG_NAME)]
            .into_iter()
            .collect()
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let mut config: Self = {
            let path = resolve(path.as_ref())?;
            let data =
                std::fs::read(&path).context(error::OpenConfigSnafu { filename: path.clone() })?;
            serde_yaml::from_slice(&data).context(error::ParseConfigSnafu { filename: path })?
        };

        config.log.file_path = config.log.file_path.as_deref().map(resolve).transpose()?;
        config.clusters_file = config.clusters_file.as_deref().map(resolve).transpose()?;

        Ok(config)
    }

    /// The default configuration, rendered as YAML.
    pub fn template_basic() -> Result<String, Error> {
        serde_yaml::to_string(&Self::default()).context(error::SerializeConfigSnafu)
    }
}

fn resolve(path: &Path) -> Result<PathBuf, Error> {
    path.try_resolve()
        .map(|path| path.to_path_buf())
        .with_context(|_| error::ResolveFilePathSnafu { file_path: path.to_path_buf() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_basic_round_trip() {
        let template = Config::template_basic().unwrap();
        let config: Config = serde_yaml::from_str(&template).unwrap();

        assert_eq!(config.default_strategy, Strategy::Auto);
        assert_eq!(config.default_output, OutputFormat::Table);
        assert!(config.clusters_file.is_none());
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = "
defaultStrategy: annotations
defaultOutput: json
clustersFile: /etc/podlinks/clusters.yaml
log:
  level: debug
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.default_strategy, Strategy::Annotations);
        assert_eq!(config.default_output, OutputFormat::Json);
        assert_eq!(config.clusters_file, Some(PathBuf::from("/etc/podlinks/clusters.yaml")));
        assert_eq!(config.log.level, tracing::Level::DEBUG);
    }

    #[test]
    fn test_deserialize_empty_config() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.default_strategy, Strategy::Auto);
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load("/nonexistent/podlinks/config.yaml");
        assert!(result.is_err());
    }
}

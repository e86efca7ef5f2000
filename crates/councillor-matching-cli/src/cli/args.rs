use std::path::PathBuf;

use clap::{Parser, Subcommand};
use councillor_matching::{CacheConfig, MatchingConfig, MatchingResult};

#[derive(Parser)]
#[command(
    name = "councillor-match",
    version,
    about = "Match a report to grouped councillor rankings"
)]
pub struct Cli {
    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve a report's category and print its ranking in groups
    Match(MatchArgs),
    /// Print the effective configuration as YAML
    Config(ConfigArgs),
    Version,
}

#[derive(clap::ValueEnum, Clone, Debug, Default, PartialEq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(clap::Args, Clone, Debug)]
pub struct MatchArgs {
    /// Report identifier, forwarded verbatim to the classification service
    #[arg(long)]
    pub report_id: String,

    /// Councillors per group (must be positive)
    #[arg(long, allow_negative_numbers = true)]
    pub group_size: i64,

    /// Output format: text, json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Configuration sources, applied in order: file, environment, flags.
#[derive(clap::Args, Clone, Debug, Default)]
pub struct ConfigArgs {
    /// YAML config file
    #[arg(long = "config")]
    pub config_file: Option<PathBuf>,

    /// Classification service base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Classifier request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Read rankings from `{dir}/{category}.json`
    #[arg(long, conflicts_with = "redis_url")]
    pub cache_dir: Option<PathBuf>,

    /// Read rankings from Redis (requires the `redis` feature)
    #[arg(long)]
    pub redis_url: Option<String>,
}

impl ConfigArgs {
    pub fn resolve(&self) -> MatchingResult<MatchingConfig> {
        let base = match &self.config_file {
            Some(path) => MatchingConfig::from_yaml_file(path)?,
            None => MatchingConfig::default(),
        };
        let mut config = base.merge_env();

        if let Some(url) = &self.base_url {
            config = config.with_base_url(url.clone());
        }
        if let Some(secs) = self.timeout {
            config = config.with_timeout_secs(secs);
        }
        if let Some(dir) = &self.cache_dir {
            config = config.with_cache(CacheConfig::Dir { path: dir.clone() });
        }
        if let Some(url) = &self.redis_url {
            config = config.with_cache(CacheConfig::Redis { url: url.clone() });
        }

        Ok(config)
    }
}

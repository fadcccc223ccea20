use crate::config::ServiceConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "cep-weather")]
#[command(about = "Current temperature for a Brazilian postal code (CEP)")]
pub struct CliArgs {
    /// TOML file with [server], [viacep] and [weather_api] sections
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Overrides both the config file and PORT
    #[arg(long)]
    pub port: Option<u16>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl CliArgs {
    /// Defaults, then the config file, then the environment, then flags.
    pub fn load_config(&self) -> Result<ServiceConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("Loading configuration from {}", path.display());
                ServiceConfig::from_file(path)?
            }
            None => ServiceConfig::default(),
        };

        config.apply_env_overrides()?;

        if let Some(port) = self.port {
            config.server.port = port;
        }

        Ok(config)
    }
}

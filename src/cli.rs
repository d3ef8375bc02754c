use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

use urlshort::config::{Config, ConfigError};

#[derive(Parser, Debug)]
#[command(name = "urlshort")]
#[command(about = "Path-to-URL redirect service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the redirect server
    Serve(ConfigArgs),
    /// Load and compose all mapping sources, then exit
    Check(ConfigArgs),
}

#[derive(clap::Args, Debug)]
pub struct ConfigArgs {
    /// Configuration file (defaults to $URLSHORT_CONFIG or config/urlshort.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Address to bind the HTTP server to
    #[arg(long)]
    pub address: Option<SocketAddr>,

    /// YAML mapping file
    #[arg(long)]
    pub yaml: Option<PathBuf>,

    /// JSON mapping file
    #[arg(long)]
    pub json: Option<PathBuf>,
}

impl ConfigArgs {
    /// Load configuration and apply command-line overrides on top
    pub fn load(self) -> Result<Config, ConfigError> {
        let mut config = match self.config {
            Some(path) => Config::load_from_path(path)?,
            None => Config::load()?,
        };

        if let Some(address) = self.address {
            config.server.bind_addr = address;
        }
        if let Some(yaml) = self.yaml {
            config.sources.yaml_path = yaml;
        }
        if let Some(json) = self.json {
            config.sources.json_path = json;
        }

        config.validate()?;
        Ok(config)
    }
}

use crate::config::toml_config::BoardConfig;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "transfer-board")]
#[command(about = "Renders the football transfer board from the transfers backend")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long)]
    pub transfers_endpoint: Option<String>,

    #[arg(long)]
    pub teams_endpoint: Option<String>,

    /// Directory the rendered page is written to
    #[arg(long)]
    pub output_path: Option<String>,

    /// Initial team selection
    #[arg(long)]
    pub team: Option<String>,

    /// Initial direction selection: "in" or "out"
    #[arg(long = "type")]
    pub transfer_type: Option<String>,

    /// Print the container markup instead of writing the page
    #[arg(long)]
    pub stdout: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// Loads the file named by `--config` (or defaults) and applies flag overrides.
    pub fn resolve(&self) -> Result<BoardConfig> {
        let mut config = match &self.config {
            Some(path) => BoardConfig::from_file(path)?,
            None => BoardConfig::default(),
        };

        if let Some(endpoint) = &self.transfers_endpoint {
            config.source.transfers_endpoint = endpoint.clone();
        }
        if let Some(endpoint) = &self.teams_endpoint {
            config.source.teams_endpoint = endpoint.clone();
        }
        if let Some(path) = &self.output_path {
            config.output.path = path.clone();
        }

        Ok(config)
    }
}

pub mod simulation;

use crate::domain::model::MeshInput;
use crate::utils::error::{OptimizeError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::Validate;
use clap::Parser;
pub use simulation::SimulationConfig;

#[derive(Debug, Clone, Parser)]
#[command(name = "mesh-optimizer")]
#[command(about = "Reports mock polygon and size reduction stats for a CAD mesh as JSON")]
pub struct CliConfig {
    /// Path to the CAD file (.step / .stp); put `--` before paths starting with `-`
    pub input: Option<String>,

    /// Ignored
    #[arg(hide = true)]
    pub extra: Vec<String>,

    /// TOML file with a [simulation] table
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the artificial processing delay
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Seed the generator for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl CliConfig {
    pub fn mesh_input(&self) -> Result<MeshInput> {
        self.input
            .as_deref()
            .map(MeshInput::new)
            .ok_or(OptimizeError::MissingInput)
    }

    /// Defaults, then the config file, then command-line flags.
    pub fn simulation(&self) -> Result<SimulationConfig> {
        let mut simulation = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path);
                SimulationConfig::from_file(path)?
            }
            None => SimulationConfig::default(),
        };
        simulation.apply_overrides(self.delay_ms, self.seed);
        simulation.validate()?;
        Ok(simulation)
    }
}

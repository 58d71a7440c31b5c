pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{CliConfig, SimulationConfig};
pub use self::core::{engine::OptimizeEngine, mock::MockOptimizer};
pub use domain::model::{ErrorReport, MeshInput, OptimizationReport};
pub use utils::error::{OptimizeError, Result};

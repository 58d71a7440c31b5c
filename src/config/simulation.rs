use crate::utils::error::{OptimizeError, Result};
use crate::utils::validation::{
    validate_finite, validate_non_negative, validate_ordered, validate_positive_number, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_DELAY_MS: u64 = 2000;
pub const DEFAULT_POLY_MIN: u64 = 500_000;
pub const DEFAULT_POLY_MAX: u64 = 2_000_000;
pub const DEFAULT_SIZE_MIN_MB: f64 = 20.0;
pub const DEFAULT_SIZE_MAX_MB: f64 = 100.0;

/// Ranges and timing the mock optimizer draws from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    pub delay_ms: u64,
    pub poly_min: u64,
    pub poly_max: u64,
    pub size_min_mb: f64,
    pub size_max_mb: f64,
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
            poly_min: DEFAULT_POLY_MIN,
            poly_max: DEFAULT_POLY_MAX,
            size_min_mb: DEFAULT_SIZE_MIN_MB,
            size_max_mb: DEFAULT_SIZE_MAX_MB,
            seed: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    simulation: SimulationConfig,
}

impl SimulationConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(OptimizeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;
        let file: ConfigFile = toml::from_str(&processed_content)?;
        Ok(file.simulation)
    }

    /// 替換環境變數 (例如 ${MESH_DELAY_MS})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| OptimizeError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Command-line values win over the file.
    pub fn apply_overrides(&mut self, delay_ms: Option<u64>, seed: Option<u64>) {
        if let Some(delay_ms) = delay_ms {
            tracing::debug!("delay_ms overridden to {}", delay_ms);
            self.delay_ms = delay_ms;
        }
        if let Some(seed) = seed {
            tracing::debug!("seed overridden to {}", seed);
            self.seed = Some(seed);
        }
    }
}

impl Validate for SimulationConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("simulation.poly_min", self.poly_min, 1)?;
        validate_ordered(
            "simulation.poly_min",
            self.poly_min,
            "simulation.poly_max",
            self.poly_max,
        )?;

        validate_non_negative("simulation.size_min_mb", self.size_min_mb)?;
        validate_finite("simulation.size_max_mb", self.size_max_mb)?;
        validate_ordered(
            "simulation.size_min_mb",
            self.size_min_mb,
            "simulation.size_max_mb",
            self.size_max_mb,
        )?;

        Ok(())
    }
}

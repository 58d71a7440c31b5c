use crate::config::SimulationConfig;
use crate::core::naming::optimized_output_path;
use crate::core::{MeshInput, MeshOptimizer, OptimizationReport};
use crate::domain::model::{REDUCTION_PERCENTAGE, STATUS_SUCCESS};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::time::Duration;

/// Share of the original polygon count that survives decimation.
pub const KEPT_POLY_PERCENT: u64 = 5;
pub const SIZE_RATIO: f64 = 0.04;

/// Fabricates decimation stats. No geometry is read.
#[derive(Debug, Clone)]
pub struct MockOptimizer {
    config: SimulationConfig,
}

impl MockOptimizer {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    fn rng(&self) -> fastrand::Rng {
        match self.config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        }
    }

    fn fabricate(&self, rng: &mut fastrand::Rng, input: &MeshInput) -> OptimizationReport {
        let original_poly = rng.u64(self.config.poly_min..=self.config.poly_max);
        let new_poly = kept_polygons(original_poly);

        let span = self.config.size_max_mb - self.config.size_min_mb;
        let original_size_mb = self.config.size_min_mb + rng.f64() * span;
        let new_size_mb = original_size_mb * SIZE_RATIO;

        OptimizationReport {
            status: STATUS_SUCCESS.to_string(),
            original_poly,
            new_poly,
            reduction_percentage: REDUCTION_PERCENTAGE,
            original_size: format_megabytes(original_size_mb),
            new_size: format_megabytes(new_size_mb),
            output_path: optimized_output_path(input.path()),
        }
    }
}

#[async_trait::async_trait]
impl MeshOptimizer for MockOptimizer {
    async fn optimize(&self, input: &MeshInput) -> Result<OptimizationReport> {
        if self.config.delay_ms > 0 {
            tracing::debug!("Simulating processing for {}ms", self.config.delay_ms);
            tokio::time::sleep(Duration::from_millis(self.config.delay_ms)).await;
        }

        let mut rng = self.rng();
        Ok(self.fabricate(&mut rng, input))
    }
}

/// `original * 5 / 100`, truncated, without overflowing near `u64::MAX`.
pub fn kept_polygons(original: u64) -> u64 {
    original / 100 * KEPT_POLY_PERCENT + original % 100 * KEPT_POLY_PERCENT / 100
}

pub fn format_megabytes(mb: f64) -> String {
    format!("{:.2} MB", mb)
}

/// Inverse of [`format_megabytes`]; `None` for anything else.
pub fn parse_megabytes(value: &str) -> Option<f64> {
    value.strip_suffix(" MB")?.parse().ok()
}

use crate::core::{MeshInput, MeshOptimizer, OptimizationReport};
use crate::utils::error::Result;
use std::time::Instant;

pub struct OptimizeEngine<O: MeshOptimizer> {
    optimizer: O,
}

impl<O: MeshOptimizer> OptimizeEngine<O> {
    pub fn new(optimizer: O) -> Self {
        Self { optimizer }
    }

    pub async fn run(&self, input: &MeshInput) -> Result<OptimizationReport> {
        let started = Instant::now();
        tracing::info!("Optimizing mesh: {}", input.file_name());

        let report = self.optimizer.optimize(input).await?;

        tracing::info!(
            original_poly = report.original_poly,
            new_poly = report.new_poly,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Optimization finished"
        );
        tracing::debug!("Output path: {}", report.output_path);

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::OptimizeError;

    struct FixedOptimizer;

    #[async_trait::async_trait]
    impl MeshOptimizer for FixedOptimizer {
        async fn optimize(&self, input: &MeshInput) -> Result<OptimizationReport> {
            Ok(OptimizationReport {
                status: "success".to_string(),
                original_poly: 100,
                new_poly: 5,
                reduction_percentage: 95,
                original_size: "1.00 MB".to_string(),
                new_size: "0.04 MB".to_string(),
                output_path: input.path().to_string(),
            })
        }
    }

    struct FailingOptimizer;

    #[async_trait::async_trait]
    impl MeshOptimizer for FailingOptimizer {
        async fn optimize(&self, _input: &MeshInput) -> Result<OptimizationReport> {
            Err(OptimizeError::ConfigError {
                message: "boom".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_run_returns_optimizer_report() {
        let engine = OptimizeEngine::new(FixedOptimizer);
        let report = engine.run(&MeshInput::new("in.step")).await.unwrap();
        assert_eq!(report.original_poly, 100);
        assert_eq!(report.output_path, "in.step");
    }

    #[tokio::test]
    async fn test_run_propagates_errors() {
        let engine = OptimizeEngine::new(FailingOptimizer);
        let err = engine.run(&MeshInput::new("in.step")).await.unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}

use crate::domain::model::{MeshInput, OptimizationReport};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait MeshOptimizer: Send + Sync {
    async fn optimize(&self, input: &MeshInput) -> Result<OptimizationReport>;
}

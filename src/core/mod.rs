pub mod engine;
pub mod mock;
pub mod naming;
pub mod report;

pub use crate::domain::model::{MeshInput, OptimizationReport};
pub use crate::domain::ports::MeshOptimizer;
pub use crate::utils::error::Result;

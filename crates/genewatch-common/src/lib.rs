//! genewatch-common — Shared record types and errors used across all genewatch crates.

pub mod error;
pub mod entities;

// Re-export commonly used types
pub use entities::{ConditionAssessment, GeneRisk, Risk, RiskLevel};
pub use error::{ApiError, GenewatchError, Result};

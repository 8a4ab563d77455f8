//! genewatch-ranker — Risk classification and priority ranking of genes.
//!
//! Pipeline: genes → [`classifier`] (per-gene counts) → [`tiers`] (bucketing
//! + within-tier sort) → [`report`] (output records).

pub mod classifier;
pub mod tiers;
pub mod report;
pub mod seed;
pub mod dataset;

pub use classifier::RiskCounts;
pub use report::{build_report, GeneRiskReport};
pub use tiers::{rank_genes, RankedGene, Tier};

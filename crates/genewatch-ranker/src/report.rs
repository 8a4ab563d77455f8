//! Output records for ranked genes.

use genewatch_common::GeneRisk;
use serde::{Deserialize, Serialize};

use crate::tiers::{rank_genes, RankedGene};

/// One row of the ranked gene report, as served by `GET /genes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneRiskReport {
    pub gene: String,
    pub high_risk_count: usize,
    pub inconclusive_count: usize,
    pub low_risk_count: usize,
}

impl From<&RankedGene<'_>> for GeneRiskReport {
    fn from(ranked: &RankedGene<'_>) -> Self {
        Self {
            gene: ranked.gene.gene.clone(),
            high_risk_count: ranked.counts.high,
            inconclusive_count: ranked.counts.inconclusive,
            low_risk_count: ranked.counts.low,
        }
    }
}

/// Rank `genes` and map the result to report rows, preserving rank order.
pub fn build_report(genes: &[GeneRisk]) -> Vec<GeneRiskReport> {
    rank_genes(genes).iter().map(GeneRiskReport::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use genewatch_common::ConditionAssessment;

    #[test]
    fn test_report_fields_serialize_with_wire_names() {
        let genes = vec![GeneRisk::new(
            "gene4",
            vec![
                ConditionAssessment::new("disease3", "high"),
                ConditionAssessment::new("disease5", "inconclusive"),
            ],
        )];
        let rows = build_report(&genes);
        let v = serde_json::to_value(&rows).unwrap();
        assert_eq!(
            v,
            serde_json::json!([{
                "gene": "gene4",
                "high_risk_count": 1,
                "inconclusive_count": 1,
                "low_risk_count": 0
            }])
        );
    }

    #[test]
    fn test_report_excludes_unclassifiable_genes() {
        let genes = vec![
            GeneRisk::new("none", vec![]),
            GeneRisk::new("odd", vec![ConditionAssessment::new("d", "medium")]),
        ];
        assert!(build_report(&genes).is_empty());
    }
}

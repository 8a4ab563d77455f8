//! Built-in gene set served when no data file is configured.

use genewatch_common::{ConditionAssessment, GeneRisk, RiskLevel};

/// The six built-in genes, in their recorded order.
pub fn seed_genes() -> Vec<GeneRisk> {
    use RiskLevel::{High, Inconclusive, Low};

    vec![
        GeneRisk::new("gene1", vec![
            ConditionAssessment::new("disease1", High),
            ConditionAssessment::new("disease2", Low),
        ]),
        GeneRisk::new("gene2", vec![
            ConditionAssessment::new("disease3", Inconclusive),
            ConditionAssessment::new("disease4", Low),
        ]),
        GeneRisk::new("gene3", vec![
            ConditionAssessment::new("disease3", High),
            ConditionAssessment::new("disease2", High),
        ]),
        GeneRisk::new("gene4", vec![
            ConditionAssessment::new("disease3", High),
            ConditionAssessment::new("disease5", Inconclusive),
        ]),
        GeneRisk::new("gene5", vec![
            ConditionAssessment::new("disease1", Inconclusive),
        ]),
        GeneRisk::new("gene6", vec![
            ConditionAssessment::new("disease2", Low),
        ]),
    ]
}

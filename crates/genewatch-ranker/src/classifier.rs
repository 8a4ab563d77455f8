//! Per-gene risk counting.
//!
//! Counts are always derived from the assessment list; nothing is cached on
//! the record itself.

use genewatch_common::{GeneRisk, RiskLevel};

/// Number of assessments on `gene` recorded at `level`.
pub fn count_of(gene: &GeneRisk, level: RiskLevel) -> usize {
    gene.assessments
        .iter()
        .filter(|a| a.risk.is(level))
        .count()
}

pub fn has_high(gene: &GeneRisk) -> bool {
    count_of(gene, RiskLevel::High) > 0
}

pub fn has_inconclusive(gene: &GeneRisk) -> bool {
    count_of(gene, RiskLevel::Inconclusive) > 0
}

pub fn has_low(gene: &GeneRisk) -> bool {
    count_of(gene, RiskLevel::Low) > 0
}

/// Number of assessments whose label is outside the known risk levels.
pub fn unrecognized_count(gene: &GeneRisk) -> usize {
    gene.assessments
        .iter()
        .filter(|a| a.risk.level().is_none())
        .count()
}

/// High / inconclusive / low counts for one gene.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RiskCounts {
    pub high: usize,
    pub inconclusive: usize,
    pub low: usize,
}

impl RiskCounts {
    /// Count all three levels in a single pass over the assessments.
    pub fn of(gene: &GeneRisk) -> Self {
        gene.assessments
            .iter()
            .filter_map(|a| a.risk.level())
            .fold(Self::default(), |mut counts, level| {
                match level {
                    RiskLevel::High         => counts.high += 1,
                    RiskLevel::Inconclusive => counts.inconclusive += 1,
                    RiskLevel::Low          => counts.low += 1,
                }
                counts
            })
    }

    pub fn get(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::High         => self.high,
            RiskLevel::Inconclusive => self.inconclusive,
            RiskLevel::Low          => self.low,
        }
    }

    pub fn has(&self, level: RiskLevel) -> bool {
        self.get(level) > 0
    }

    /// Sum over recognized levels only.
    pub fn total(&self) -> usize {
        self.high + self.inconclusive + self.low
    }
}

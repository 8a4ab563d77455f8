//! Priority tiers and the ranking pass.
//!
//! | Tier              | Membership                              | Sorted by (desc) |
//! |-------------------|-----------------------------------------|------------------|
//! | HighOnly          | high, no inconclusive                   | high             |
//! | HighInconclusive  | high and inconclusive                   | high             |
//! | InconclusiveOnly  | inconclusive, no high                   | inconclusive     |
//! | LowOnly           | low, no high, no inconclusive           | low              |
//!
//! Genes matching none of the rows (no recognized assessments) are dropped
//! from the ranking. Ties keep input order.

use std::cmp::Reverse;

use genewatch_common::{GeneRisk, RiskLevel};
use tracing::{debug, instrument, warn};

use crate::classifier::{has_high, has_inconclusive, has_low, unrecognized_count, RiskCounts};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    HighOnly,
    HighInconclusive,
    InconclusiveOnly,
    LowOnly,
}

impl Tier {
    /// Tiers in output order.
    pub const ORDERED: [Tier; 4] = [
        Tier::HighOnly,
        Tier::HighInconclusive,
        Tier::InconclusiveOnly,
        Tier::LowOnly,
    ];

    /// Tier for a set of counts, or `None` if no tier applies.
    pub fn classify(counts: &RiskCounts) -> Option<Tier> {
        Self::from_flags(
            counts.has(RiskLevel::High),
            counts.has(RiskLevel::Inconclusive),
            counts.has(RiskLevel::Low),
        )
    }

    /// Tier for a gene, evaluated straight from its assessments.
    pub fn of(gene: &GeneRisk) -> Option<Tier> {
        Self::from_flags(has_high(gene), has_inconclusive(gene), has_low(gene))
    }

    fn from_flags(high: bool, inconclusive: bool, low: bool) -> Option<Tier> {
        match (high, inconclusive, low) {
            (true, false, _)     => Some(Tier::HighOnly),
            (true, true, _)      => Some(Tier::HighInconclusive),
            (false, true, _)     => Some(Tier::InconclusiveOnly),
            (false, false, true) => Some(Tier::LowOnly),
            (false, false, false) => None,
        }
    }

    /// Level whose count orders genes inside this tier.
    pub fn sort_level(&self) -> RiskLevel {
        match self {
            Tier::HighOnly | Tier::HighInconclusive => RiskLevel::High,
            Tier::InconclusiveOnly                  => RiskLevel::Inconclusive,
            Tier::LowOnly                           => RiskLevel::Low,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::HighOnly         => "High only",
            Tier::HighInconclusive => "High + Inconclusive",
            Tier::InconclusiveOnly => "Inconclusive only",
            Tier::LowOnly          => "Low only",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// A gene placed in the ranking, with the counts used to place it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedGene<'a> {
    pub gene: &'a GeneRisk,
    pub counts: RiskCounts,
    pub tier: Tier,
}

/// Rank `genes` by clinical urgency.
///
/// Buckets every gene into its [`Tier`], sorts each bucket by the tier's
/// count (descending, stable), then concatenates the buckets in
/// [`Tier::ORDERED`] order.
#[instrument(skip_all, fields(n_genes = genes.len()))]
pub fn rank_genes(genes: &[GeneRisk]) -> Vec<RankedGene<'_>> {
    let mut buckets: [Vec<RankedGene<'_>>; 4] = Default::default();

    for gene in genes {
        let unrecognized = unrecognized_count(gene);
        if unrecognized > 0 {
            warn!(gene = %gene.gene, unrecognized, "Ignoring assessments with unrecognized risk level");
        }

        let counts = RiskCounts::of(gene);
        match Tier::classify(&counts) {
            Some(tier) => buckets[tier.index()].push(RankedGene { gene, counts, tier }),
            None => debug!(gene = %gene.gene, "No tier matched; gene excluded from ranking"),
        }
    }

    for (tier, bucket) in Tier::ORDERED.iter().zip(buckets.iter_mut()) {
        let level = tier.sort_level();
        // sort_by_key is stable: equal counts keep input order
        bucket.sort_by_key(|r| Reverse(r.counts.get(level)));
        debug!(tier = tier.label(), n_genes = bucket.len(), "Tier sorted");
    }

    let ranked: Vec<RankedGene<'_>> = buckets.into_iter().flatten().collect();
    debug!(n_ranked = ranked.len(), "Ranking complete");
    ranked
}

//! Core record types for genetic-risk assessments.
//! A gene carries an ordered list of (condition, risk) assessments;
//! everything else (counts, tiers) is derived from that list.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GenewatchError;

// ---------------------------------------------------------------------------
// Risk level
// ---------------------------------------------------------------------------

/// Closed set of clinical risk severities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    High,
    Inconclusive,
    Low,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::High, RiskLevel::Inconclusive, RiskLevel::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::High         => "high",
            RiskLevel::Inconclusive => "inconclusive",
            RiskLevel::Low          => "low",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = GenewatchError;

    /// Labels are matched exactly; `"High"` is not `high`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high"         => Ok(RiskLevel::High),
            "inconclusive" => Ok(RiskLevel::Inconclusive),
            "low"          => Ok(RiskLevel::Low),
            other          => Err(GenewatchError::UnknownRiskLevel(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Recorded risk
// ---------------------------------------------------------------------------

/// Risk as recorded on an assessment.
///
/// Labels outside the closed set are kept verbatim so they can be reported,
/// but they never compare equal to any [`RiskLevel`]. Built only through
/// `From`, so a known label always becomes its level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Risk(Recorded);

#[derive(Debug, Clone, PartialEq, Eq)]
enum Recorded {
    Level(RiskLevel),
    Unrecognized(String),
}

impl Risk {
    pub fn level(&self) -> Option<RiskLevel> {
        match &self.0 {
            Recorded::Level(level) => Some(*level),
            Recorded::Unrecognized(_) => None,
        }
    }

    pub fn is(&self, level: RiskLevel) -> bool {
        self.level() == Some(level)
    }

    /// The label as recorded.
    pub fn label(&self) -> &str {
        match &self.0 {
            Recorded::Level(level) => level.as_str(),
            Recorded::Unrecognized(label) => label,
        }
    }
}

impl From<RiskLevel> for Risk {
    fn from(level: RiskLevel) -> Self {
        Risk(Recorded::Level(level))
    }
}

impl From<String> for Risk {
    fn from(label: String) -> Self {
        match label.parse::<RiskLevel>() {
            Ok(level) => Risk(Recorded::Level(level)),
            Err(_) => Risk(Recorded::Unrecognized(label)),
        }
    }
}

impl From<&str> for Risk {
    fn from(label: &str) -> Self {
        Risk::from(label.to_string())
    }
}

impl From<Risk> for String {
    fn from(risk: Risk) -> Self {
        match risk.0 {
            Recorded::Level(level) => level.as_str().to_string(),
            Recorded::Unrecognized(label) => label,
        }
    }
}

// ---------------------------------------------------------------------------
// Assessment / Gene
// ---------------------------------------------------------------------------

/// One clinical condition's assessed risk for a gene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionAssessment {
    pub condition: String,
    pub risk: Risk,
}

impl ConditionAssessment {
    pub fn new(condition: impl Into<String>, risk: impl Into<Risk>) -> Self {
        Self {
            condition: condition.into(),
            risk: risk.into(),
        }
    }
}

/// A gene and its condition assessments, in recorded order.
/// Duplicate conditions or levels are legal and each one counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneRisk {
    pub gene: String,
    #[serde(default, alias = "risk")]
    pub assessments: Vec<ConditionAssessment>,
}

impl GeneRisk {
    pub fn new(gene: impl Into<String>, assessments: Vec<ConditionAssessment>) -> Self {
        Self {
            gene: gene.into(),
            assessments,
        }
    }
}

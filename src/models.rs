// Data models: the records that flow between the input layer, the scoring
// engine, and the output layer.
//
// JSON field names are camelCase; batch input files and `--json` output share
// the same shape.

use serde::{Deserialize, Serialize};

/// The six account attributes supplied by the caller.
///
/// Numeric fields are signed on purpose: the engine evaluates whatever the
/// caller hands it, including negative values. Range checks belong to
/// `crate::input::validate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountData {
    pub username: String,
    /// Account age in days
    #[serde(default)]
    pub account_age: i64,
    #[serde(default)]
    pub followers: i64,
    #[serde(default)]
    pub following: i64,
    /// Bio length in characters
    #[serde(default)]
    pub bio_length: i64,
    #[serde(default = "default_has_profile_photo")]
    pub has_profile_photo: bool,
}

fn default_has_profile_photo() -> bool {
    true
}

/// A single heuristic that fired during analysis, kept as evidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggeredRule {
    /// Short label, e.g. "New Account"
    pub rule: String,
    pub points: u32,
    /// Human-readable explanation with the triggering values filled in
    pub description: String,
}

/// The outcome of analyzing one account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Assigned by the history store, never by the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub username: String,
    pub account_data: AccountData,
    /// Capped at 100
    pub risk_score: u32,
    pub risk_level: RiskLevel,
    /// In rule evaluation order, not score order
    pub triggered_rules: Vec<TriggeredRule>,
    /// ISO-8601 UTC timestamp of when the analysis ran
    pub timestamp: String,
}

impl AnalysisResult {
    /// Sum of all triggered points before the 100-point cap.
    pub fn total_points(&self) -> u32 {
        self.triggered_rules.iter().map(|r| r.points).sum()
    }
}

/// Risk tier: a fixed banding of the 0-100 risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Determine the tier from a risk score.
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 60 => RiskLevel::High,
            s if s >= 30 => RiskLevel::Medium,
            _ => RiskLevel::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

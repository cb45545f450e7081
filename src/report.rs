//! # Validation Report Types
//!
//! Structured results produced by the business rules engine: individual
//! findings with a severity level, per-level counters and the aggregate
//! report returned to the caller. The JSON shape of these types is the wire
//! contract of the `validate-order` endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a single finding, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationLevel {
    /// Informational, no action needed
    Info,
    /// Should be reviewed, not blocking
    Warning,
    /// The order is invalid as given and must be fixed
    Error,
    /// Severe safety or business violation
    Critical,
}

impl fmt::Display for ValidationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationLevel::Info => write!(f, "info"),
            ValidationLevel::Warning => write!(f, "warning"),
            ValidationLevel::Error => write!(f, "error"),
            ValidationLevel::Critical => write!(f, "critical"),
        }
    }
}

/// One structured result emitted by a validator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Severity of this finding
    pub level: ValidationLevel,
    /// Human-readable description
    pub message: String,
    /// Tag identifying the checked attribute (e.g. "portion_size")
    pub field: String,
    /// Suggested correction, when one applies
    pub recommendation: Option<String>,
    /// Citation of a prior real case, informational only
    pub reference_case: Option<String>,
}

impl Finding {
    /// Create a finding with a level, field tag and message
    pub fn new(level: ValidationLevel, field: &str, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            field: field.to_string(),
            recommendation: None,
            reference_case: None,
        }
    }

    /// Attach a recommendation
    pub fn with_recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendation = Some(recommendation.into());
        self
    }

    /// Attach a reference case citation
    pub fn with_reference_case(mut self, reference_case: &str) -> Self {
        self.reference_case = Some(reference_case.to_string());
        self
    }
}

/// Overall verdict for a validated order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallStatus {
    /// No blocking findings
    Valid,
    /// Warnings on business-critical fields
    Warning,
    /// At least one error-level finding
    Error,
    /// At least one critical-level finding
    Critical,
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverallStatus::Valid => write!(f, "valid"),
            OverallStatus::Warning => write!(f, "warning"),
            OverallStatus::Error => write!(f, "error"),
            OverallStatus::Critical => write!(f, "critical"),
        }
    }
}

/// Finding counts per severity level; every level is always present
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelCounts {
    pub info: usize,
    pub warning: usize,
    pub error: usize,
    pub critical: usize,
}

impl LevelCounts {
    /// Tally one finding at the given level
    pub fn record(&mut self, level: ValidationLevel) {
        match level {
            ValidationLevel::Info => self.info += 1,
            ValidationLevel::Warning => self.warning += 1,
            ValidationLevel::Error => self.error += 1,
            ValidationLevel::Critical => self.critical += 1,
        }
    }

    /// Count for one level
    pub fn get(&self, level: ValidationLevel) -> usize {
        match level {
            ValidationLevel::Info => self.info,
            ValidationLevel::Warning => self.warning,
            ValidationLevel::Error => self.error,
            ValidationLevel::Critical => self.critical,
        }
    }

    /// Sum over all levels
    pub fn total(&self) -> usize {
        self.info + self.warning + self.error + self.critical
    }
}

/// Summary statistics over all findings in a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of findings in the report
    pub total_validations: usize,
    /// Findings broken down by severity level
    pub by_level: LevelCounts,
}

/// The complete validation report for one order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Single worst-case verdict for the order
    pub overall_status: OverallStatus,
    /// All findings in validator execution order
    pub validations: Vec<Finding>,
    /// Aggregate statistics
    pub summary: Summary,
    /// Up to five actionable recommendations
    pub recommendations: Vec<String>,
}

impl Report {
    /// Whether the order can proceed without fixes
    pub fn is_acceptable(&self) -> bool {
        matches!(
            self.overall_status,
            OverallStatus::Valid | OverallStatus::Warning
        )
    }
}

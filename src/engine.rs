//! # Business Rules Engine
//!
//! The aggregator that runs all five validators over an order and folds their
//! findings into one [`Report`]. The engine is stateless across calls: the
//! standards table is immutable and validators keep no instance state, so one
//! engine can serve concurrent callers without locking.

use std::panic::{self, AssertUnwindSafe};

use chrono::{Local, NaiveDateTime};
use tracing::{error, info};

use crate::order::Order;
use crate::report::{Finding, LevelCounts, OverallStatus, Report, Summary, ValidationLevel};
use crate::standards::BusinessStandards;
use crate::validators::{
    CostValidator, MenuValidator, OrderValidator, PortionValidator, ServiceValidator,
    TimingValidator, ValidationContext,
};

/// Maximum number of recommendations carried in a report
const MAX_RECOMMENDATIONS: usize = 5;

/// Warning findings on these fields downgrade the overall status to
/// "warning"; warnings on any other field leave the order "valid".
const CRITICAL_WARNING_FIELDS: [&str; 3] = ["portion_size", "total_cost", "waiter_count"];

/// Runs the business rule validators over catering orders.
///
/// Construct one engine per standards configuration and call
/// [`validate_order`](Self::validate_order) freely; every call computes a
/// fresh report. The engine never panics into the caller: any panic raised
/// during validation is converted into a one-finding error report.
pub struct BusinessRulesEngine {
    standards: BusinessStandards,
    validators: Vec<Box<dyn OrderValidator>>,
}

impl Default for BusinessRulesEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl BusinessRulesEngine {
    /// Create an engine with the default standards table
    pub fn new() -> Self {
        Self::with_standards(BusinessStandards::default())
    }

    /// Create an engine with a custom standards table
    pub fn with_standards(standards: BusinessStandards) -> Self {
        Self {
            standards,
            // Fixed execution order; findings keep this order in the report
            validators: vec![
                Box::new(PortionValidator),
                Box::new(CostValidator),
                Box::new(ServiceValidator),
                Box::new(TimingValidator),
                Box::new(MenuValidator),
            ],
        }
    }

    /// The active standards table
    pub fn standards(&self) -> &BusinessStandards {
        &self.standards
    }

    /// Validate an order against the business rules.
    ///
    /// The clock is sampled once at the start of the call; use
    /// [`validate_order_at`](Self::validate_order_at) to pin it explicitly.
    pub fn validate_order(&self, order: &Order) -> Report {
        self.validate_order_at(order, Local::now().naive_local())
    }

    /// Validate an order with an explicit "current time".
    ///
    /// Two calls with the same order and the same timestamp produce identical
    /// reports, which makes this the entry point for deterministic callers
    /// and tests.
    pub fn validate_order_at(&self, order: &Order, now: NaiveDateTime) -> Report {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.run_validators(order, now)));

        let findings = match outcome {
            Ok(findings) => findings,
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                error!(panic = %message, "validation panicked, returning failure report");
                return failure_report(&message);
            }
        };

        let report = build_report(findings);
        info!(
            status = %report.overall_status,
            validations = report.summary.total_validations,
            "order validation completed"
        );
        report
    }

    fn run_validators(&self, order: &Order, now: NaiveDateTime) -> Vec<Finding> {
        let ctx = ValidationContext {
            standards: &self.standards,
            now,
        };

        let mut findings = Vec::new();
        for validator in &self.validators {
            let mut produced = validator.validate(order, &ctx);
            tracing::debug!(validator = validator.name(), count = produced.len(), "validator ran");
            findings.append(&mut produced);
        }
        findings
    }
}

/// Assemble a report from the concatenated findings
fn build_report(findings: Vec<Finding>) -> Report {
    let overall_status = determine_overall_status(&findings);

    let mut by_level = LevelCounts::default();
    for finding in &findings {
        by_level.record(finding.level);
    }

    let recommendations = collect_recommendations(&findings);

    Report {
        overall_status,
        summary: Summary {
            total_validations: findings.len(),
            by_level,
        },
        validations: findings,
        recommendations,
    }
}

/// Derive the single worst-case status, with the two-tier warning rule:
/// warnings only count against the order when they concern a business-critical
/// field; a report whose only warnings are on fields like "cost_per_guest" or
/// "timing" stays valid.
fn determine_overall_status(findings: &[Finding]) -> OverallStatus {
    if findings
        .iter()
        .any(|f| f.level == ValidationLevel::Critical)
    {
        return OverallStatus::Critical;
    }
    if findings.iter().any(|f| f.level == ValidationLevel::Error) {
        return OverallStatus::Error;
    }

    let has_critical_warning = findings.iter().any(|f| {
        f.level == ValidationLevel::Warning
            && CRITICAL_WARNING_FIELDS.contains(&f.field.as_str())
    });
    if has_critical_warning {
        OverallStatus::Warning
    } else {
        OverallStatus::Valid
    }
}

/// Collect recommendations: critical/error findings first in emission order,
/// then deduplicated warning recommendations, capped at five. Info findings
/// never contribute.
fn collect_recommendations(findings: &[Finding]) -> Vec<String> {
    let mut recommendations: Vec<String> = Vec::new();

    for finding in findings {
        if finding.level >= ValidationLevel::Error {
            if let Some(rec) = &finding.recommendation {
                recommendations.push(rec.clone());
            }
        }
    }

    for finding in findings {
        if finding.level == ValidationLevel::Warning {
            if let Some(rec) = &finding.recommendation {
                if !recommendations.contains(rec) {
                    recommendations.push(rec.clone());
                }
            }
        }
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}

/// The degenerate report returned when validation itself fails
fn failure_report(message: &str) -> Report {
    let finding = Finding::new(
        ValidationLevel::Error,
        "system",
        format!("Validation failed: {message}"),
    )
    .with_recommendation("Check that the order data is well-formed");

    let mut by_level = LevelCounts::default();
    by_level.record(ValidationLevel::Error);

    Report {
        overall_status: OverallStatus::Error,
        validations: vec![finding],
        summary: Summary {
            total_validations: 1,
            by_level,
        },
        recommendations: vec!["Fix the errors in the order data".to_string()],
    }
}

/// Best-effort extraction of a panic payload message
fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown internal error".to_string()
    }
}

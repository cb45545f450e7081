//! Staffing checks: waiter headcount against the guests-per-waiter ratios.

use tracing::debug;

use crate::order::Order;
use crate::report::{Finding, ValidationLevel};

use super::{OrderValidator, ValidationContext};

/// Validates waiter staffing levels.
///
/// Waiter lines are picked out of the services by the keyword heuristic in
/// the standards table. Orders with no waiters at all produce no finding;
/// delivery-only orders are legitimate and lead time is checked elsewhere.
pub struct ServiceValidator;

impl OrderValidator for ServiceValidator {
    fn name(&self) -> &'static str {
        "service"
    }

    fn validate(&self, order: &Order, ctx: &ValidationContext<'_>) -> Vec<Finding> {
        let mut findings = Vec::new();

        let guests = order.order_info.guests;
        let waiter_count: i64 = order
            .services
            .iter()
            .filter(|s| ctx.standards.is_waiter_service(&s.name))
            .map(|s| s.quantity.unwrap_or(0))
            .sum();

        if waiter_count == 0 {
            return findings;
        }

        let ratios = &ctx.standards.waiter_ratios;
        let min_waiters = (guests / ratios.simple).max(1);
        let max_waiters = (guests / ratios.complex).max(2);
        debug!(waiter_count, min_waiters, max_waiters, "checking staffing");

        if waiter_count < min_waiters {
            findings.push(
                Finding::new(
                    ValidationLevel::Warning,
                    "waiter_count",
                    format!("Too few waiters: {waiter_count} for {guests} guests"),
                )
                .with_recommendation(format!("At least {min_waiters} waiter(s) recommended")),
            );
        } else if waiter_count > max_waiters {
            findings.push(
                Finding::new(
                    ValidationLevel::Warning,
                    "waiter_count",
                    format!("Too many waiters: {waiter_count} for {guests} guests"),
                )
                .with_recommendation(format!("Optimal count: {min_waiters}-{max_waiters}")),
            );
        } else {
            findings.push(
                Finding::new(
                    ValidationLevel::Info,
                    "waiter_count",
                    format!("Waiter count is optimal: {waiter_count}"),
                )
                .with_recommendation("Staffing meets the requirements"),
            );
        }

        findings
    }
}

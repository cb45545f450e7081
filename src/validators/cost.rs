//! Order cost checks: minimum order amount and cost-per-guest plausibility.

use tracing::debug;

use crate::order::Order;
use crate::report::{Finding, ValidationLevel};

use super::{OrderValidator, ValidationContext};

// Tolerance factors around the per-guest cost window
const LOW_COST_FACTOR: f64 = 0.7;
const HIGH_COST_FACTOR: f64 = 1.5;

/// Validates the order total against the minimum order amount and, when the
/// guest count is known, the per-guest cost against the event-type range.
///
/// An order below the minimum is rejected outright; the per-guest check is
/// skipped in that case.
pub struct CostValidator;

impl OrderValidator for CostValidator {
    fn name(&self) -> &'static str {
        "cost"
    }

    fn validate(&self, order: &Order, ctx: &ValidationContext<'_>) -> Vec<Finding> {
        let mut findings = Vec::new();

        let guests = order.order_info.guests;
        let event_type = order.order_info.event_type();
        let total_cost = order.totals.total_cost;
        let min_order = ctx.standards.min_order_amount;

        if total_cost < min_order {
            findings.push(
                Finding::new(
                    ValidationLevel::Error,
                    "total_cost",
                    format!(
                        "Order total {total_cost:.0} is below the minimum of {min_order:.0}"
                    ),
                )
                .with_recommendation(format!("Increase the order to at least {min_order:.0}")),
            );
            return findings;
        }

        if guests > 0 {
            let cost_per_guest = total_cost / guests as f64;
            let range = ctx.standards.cost_per_guest.for_event(event_type);
            debug!(cost_per_guest, %event_type, "checking cost per guest");

            if cost_per_guest < range.min * LOW_COST_FACTOR {
                findings.push(
                    Finding::new(
                        ValidationLevel::Warning,
                        "cost_per_guest",
                        format!("Low cost per guest: {cost_per_guest:.0}"),
                    )
                    .with_recommendation(format!(
                        "Expected range: {:.0}-{:.0} per guest",
                        range.min, range.max
                    )),
                );
            } else if cost_per_guest > range.max * HIGH_COST_FACTOR {
                findings.push(
                    Finding::new(
                        ValidationLevel::Warning,
                        "cost_per_guest",
                        format!("High cost per guest: {cost_per_guest:.0}"),
                    )
                    .with_recommendation("Double-check the calculation"),
                );
            } else {
                findings.push(
                    Finding::new(
                        ValidationLevel::Info,
                        "total_cost",
                        format!("Order total {total_cost:.0} meets the requirements"),
                    )
                    .with_recommendation("Cost is within the expected range"),
                );
            }
        }

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::EventType;
    use crate::standards::BusinessStandards;
    use crate::validators::test_support::fixed_context;

    fn validate(order: &Order) -> Vec<Finding> {
        let standards = BusinessStandards::default();
        let ctx = fixed_context(&standards);
        CostValidator.validate(order, &ctx)
    }

    #[test]
    fn test_below_minimum_is_error_and_short_circuits() {
        let order = Order::new()
            .with_guests(5)
            .with_event_type(EventType::CoffeeBreak)
            .with_totals(1500.0, 8000.0);
        let findings = validate(&order);

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].level, ValidationLevel::Error);
        assert_eq!(findings[0].field, "total_cost");
        assert!(findings[0]
            .recommendation
            .as_deref()
            .unwrap()
            .contains("10000"));
    }

    #[test]
    fn test_low_cost_per_guest_is_warning() {
        // 1000 per guest against a buffet floor of 2300 * 0.7 = 1610
        let order = Order::new().with_guests(30).with_totals(10_500.0, 30_000.0);
        let findings = validate(&order);

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].level, ValidationLevel::Warning);
        assert_eq!(findings[0].field, "cost_per_guest");
    }

    #[test]
    fn test_high_cost_per_guest_is_warning() {
        // 6000 per guest against a buffet ceiling of 3300 * 1.5 = 4950
        let order = Order::new().with_guests(10).with_totals(4000.0, 60_000.0);
        let findings = validate(&order);

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].level, ValidationLevel::Warning);
        assert_eq!(findings[0].field, "cost_per_guest");
    }

    #[test]
    fn test_in_range_cost_is_info_on_total_cost() {
        // 2500 per guest, inside the buffet window
        let order = Order::new().with_guests(30).with_totals(10_500.0, 75_000.0);
        let findings = validate(&order);

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].level, ValidationLevel::Info);
        assert_eq!(findings[0].field, "total_cost");
    }

    #[test]
    fn test_unknown_guest_count_skips_per_guest_check() {
        let order = Order::new().with_totals(10_500.0, 75_000.0);
        let findings = validate(&order);

        assert!(findings.is_empty());
    }
}

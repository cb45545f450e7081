//! Portion weight checks: grams-per-guest against the absolute bounds and the
//! event-type standard.

use tracing::debug;

use crate::order::Order;
use crate::report::{Finding, ValidationLevel};
use crate::standards::{ABSOLUTE_MAX_GRAMS_PER_GUEST, ABSOLUTE_MIN_GRAMS_PER_GUEST};

use super::{OrderValidator, ValidationContext};

/// Validates that the ordered food weight is adequate for the guest count.
///
/// The absolute 250g/750g bounds are checked before the per-type standard and
/// win over it: a portion below the floor is a critical shortage no matter
/// which event format was requested, so the type-specific window is only
/// consulted inside the universally acceptable range.
pub struct PortionValidator;

impl OrderValidator for PortionValidator {
    fn name(&self) -> &'static str {
        "portion"
    }

    fn validate(&self, order: &Order, ctx: &ValidationContext<'_>) -> Vec<Finding> {
        let mut findings = Vec::new();

        let guests = order.order_info.guests;
        let event_type = order.order_info.event_type();
        let total_weight = order.totals.total_weight;

        if guests <= 0 {
            findings.push(
                Finding::new(
                    ValidationLevel::Error,
                    "guests",
                    "Guest count must be greater than zero",
                )
                .with_recommendation("Provide a valid guest count"),
            );
            return findings;
        }

        let grams_per_guest = total_weight / guests as f64;
        let standard = ctx.standards.portions.for_event(event_type);
        debug!(grams_per_guest, %event_type, "checking portion size");

        if grams_per_guest < ABSOLUTE_MIN_GRAMS_PER_GUEST {
            findings.push(
                Finding::new(
                    ValidationLevel::Critical,
                    "portion_size",
                    format!(
                        "Insufficient food: {grams_per_guest:.0}g per guest is below the \
                         {ABSOLUTE_MIN_GRAMS_PER_GUEST:.0}g floor"
                    ),
                )
                .with_recommendation(format!(
                    "Increase the menu to at least {ABSOLUTE_MIN_GRAMS_PER_GUEST:.0}g per guest"
                )),
            );
        } else if grams_per_guest > ABSOLUTE_MAX_GRAMS_PER_GUEST {
            findings.push(
                Finding::new(
                    ValidationLevel::Warning,
                    "portion_size",
                    format!(
                        "Too much food: {grams_per_guest:.0}g per guest exceeds the \
                         {ABSOLUTE_MAX_GRAMS_PER_GUEST:.0}g ceiling"
                    ),
                )
                .with_recommendation("Consider reducing portions"),
            );
        } else if standard.min <= grams_per_guest && grams_per_guest <= standard.max {
            findings.push(
                Finding::new(
                    ValidationLevel::Info,
                    "portion_size",
                    format!("Optimal portion size: {grams_per_guest:.0}g per guest for {event_type}"),
                )
                .with_recommendation("Portion size meets the standard")
                .with_reference_case("P-39454"),
            );
        } else {
            findings.push(
                Finding::new(
                    ValidationLevel::Warning,
                    "portion_size",
                    format!(
                        "Portion size outside the {event_type} standard: \
                         {grams_per_guest:.0}g per guest"
                    ),
                )
                .with_recommendation(format!(
                    "Optimal range: {:.0}-{:.0}g per guest",
                    standard.min, standard.max
                )),
            );
        }

        findings
    }
}

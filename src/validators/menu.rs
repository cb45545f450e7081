//! Menu composition checks: non-empty menu and category variety.

use std::collections::HashSet;

use crate::order::Order;
use crate::report::{Finding, ValidationLevel};

use super::{OrderValidator, ValidationContext};

/// Validates that the menu is present and spans more than one category.
/// Items without a category are grouped under "unknown".
pub struct MenuValidator;

impl OrderValidator for MenuValidator {
    fn name(&self) -> &'static str {
        "menu"
    }

    fn validate(&self, order: &Order, _ctx: &ValidationContext<'_>) -> Vec<Finding> {
        let mut findings = Vec::new();

        if order.menu_items.is_empty() {
            findings.push(
                Finding::new(
                    ValidationLevel::Error,
                    "menu_items",
                    "Menu cannot be empty",
                )
                .with_recommendation("Add dishes to the order"),
            );
            return findings;
        }

        let categories: HashSet<&str> = order
            .menu_items
            .iter()
            .map(|item| item.category())
            .collect();

        if categories.len() < 2 {
            findings.push(
                Finding::new(
                    ValidationLevel::Warning,
                    "menu_composition",
                    "Low menu variety",
                )
                .with_recommendation("Add dishes from different categories"),
            );
        } else {
            findings.push(
                Finding::new(
                    ValidationLevel::Info,
                    "menu_composition",
                    format!("Varied menu: {} categories", categories.len()),
                )
                .with_recommendation("Good variety of dishes"),
            );
        }

        findings
    }
}

//! # Order Validators
//!
//! The five independent rule checkers behind the business rules engine. Each
//! validator consumes the order snapshot plus the shared validation context
//! and produces zero or more findings; validators never see each other's
//! output and hold no state of their own.

mod cost;
mod menu;
mod portion;
mod service;
mod timing;

pub use cost::CostValidator;
pub use menu::MenuValidator;
pub use portion::PortionValidator;
pub use service::ServiceValidator;
pub use timing::TimingValidator;

use chrono::NaiveDateTime;

use crate::order::Order;
use crate::report::Finding;
use crate::standards::BusinessStandards;

/// Shared read-only context for one validation pass.
///
/// `now` is sampled once per engine call so that every validator in the pass
/// sees the same clock reading.
pub struct ValidationContext<'a> {
    /// The active standards table
    pub standards: &'a BusinessStandards,
    /// Timestamp the validation pass was started at
    pub now: NaiveDateTime,
}

/// A single stateless rule checker
pub trait OrderValidator: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Check the order and return any findings, in emission order
    fn validate(&self, order: &Order, ctx: &ValidationContext<'_>) -> Vec<Finding>;
}

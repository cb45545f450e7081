//! # Catering Business Rules Engine
//!
//! Validates catering orders against hand-coded business standards: portion
//! weight per guest, minimum order value, waiter staffing ratios, lead-time
//! requirements and menu composition. The engine is a pure computation over
//! an immutable standards table; it produces a structured [`report::Report`]
//! and never fails into the caller.
//!
//! The crate also ships the HTTP surface used by the surrounding estimate
//! tooling ([`api`]) and a staffing cost calculator ([`calculations`]).

pub mod api;
pub mod calculations;
pub mod config;
pub mod engine;
pub mod order;
pub mod report;
pub mod standards;
pub mod validators;

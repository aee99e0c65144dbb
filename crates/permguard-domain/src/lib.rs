//! Pure verification of workflow permission declarations (no IO).
//!
//! Input: a workflow set constructed elsewhere.
//! Output: findings + per-file audits + verdict.

#![forbid(unsafe_code)]

pub mod model;
pub mod report;

mod engine;
pub mod checks;

#[cfg(test)]
mod test_support;

pub use engine::evaluate;

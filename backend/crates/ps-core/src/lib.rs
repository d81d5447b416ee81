pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::coverage_report::{CoverageReport, CoveredItem};
pub use models::policy_analysis::PolicyAnalysis;
pub use models::scenario::Scenario;
pub use models::user::User;

#[cfg(test)]
mod tests;

pub mod coverage_report;
pub mod policy_analysis;
pub mod scenario;
pub mod user;

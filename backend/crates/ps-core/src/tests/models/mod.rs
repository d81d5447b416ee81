mod coverage_report;
mod scenario;

pub mod client;
pub mod error;
pub mod prompt;

pub use client::{AnalysisOutput, PolicyAnalysisGateway};
pub use error::{GatewayError, Result};

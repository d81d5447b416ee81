pub mod analysis;
pub mod auth;
pub mod documents;
pub mod error;
pub mod extractors;
pub mod scenarios;

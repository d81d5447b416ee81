pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::pool::{connect, migrate};
pub use error::{DbError, Result};
pub use repositories::analysis_repository::AnalysisRepository;
pub use repositories::user_repository::UserRepository;

pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod session;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::error::{ApiError, Result as ApiResult};
pub use error::{Result, ServerError};
pub use routes::build_router;
pub use session::{HeldDocument, SessionContext, SessionRegistry};
pub use state::AppState;

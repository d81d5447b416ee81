pub mod context;
pub mod registry;

pub use context::{HeldDocument, SessionContext};
pub use registry::SessionRegistry;

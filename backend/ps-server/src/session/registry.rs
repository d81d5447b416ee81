use crate::session::SessionContext;

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, info};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Registry of live sessions keyed by opaque bearer token.
///
/// Tokens are random UUIDs issued at login and never persisted; a server
/// restart logs everyone out.
#[derive(Clone, Default)]
pub struct SessionRegistry {
    inner: Arc<RwLock<HashMap<Uuid, SessionContext>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session and returns its token.
    pub async fn create(&self, context: SessionContext) -> Uuid {
        let token = Uuid::new_v4();
        let mut sessions = self.inner.write().await;
        sessions.insert(token, context);
        info!("Session created ({} active)", sessions.len());
        token
    }

    pub async fn get(&self, token: Uuid) -> Option<SessionContext> {
        self.inner.read().await.get(&token).cloned()
    }

    /// Applies a mutation to a live session. Returns false when the token
    /// is no longer registered (logged out mid-request).
    pub async fn update<F>(&self, token: Uuid, mutate: F) -> bool
    where
        F: FnOnce(&mut SessionContext),
    {
        let mut sessions = self.inner.write().await;
        match sessions.get_mut(&token) {
            Some(context) => {
                mutate(context);
                true
            }
            None => false,
        }
    }

    /// Removes a session. Dropping the context clears the held document,
    /// selected scenario, and last result in one step.
    pub async fn remove(&self, token: Uuid) -> bool {
        let mut sessions = self.inner.write().await;
        let removed = sessions.remove(&token).is_some();
        if removed {
            debug!("Session removed ({} active)", sessions.len());
        }
        removed
    }

    pub async fn count(&self) -> usize {
        self.inner.read().await.len()
    }
}

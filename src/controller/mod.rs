use std::sync::Arc;

use crate::model::PickupPolicy;
use crate::storage::Storage;

pub mod leaderboard;

/// Shared by every worker; built once in `main` and handed to actix as app data.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub pickup_policy: PickupPolicy,
}

impl AppState {
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>, pickup_policy: PickupPolicy) -> Self {
        Self {
            storage,
            pickup_policy,
        }
    }
}

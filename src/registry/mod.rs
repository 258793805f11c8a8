//! In-memory activity registry
//!
//! One table shared by every request handler. Each signup or unregister takes
//! the write lock once and performs its membership check and mutation under
//! it, so concurrent requests for the same activity never interleave.

pub mod seed;
pub mod table;

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::Activity;

pub use seed::{SeedError, default_activities, load_seed_file};
pub use table::{ActivityEntries, ActivityTable, TableError};

/// Business-rule failures of the registry operations.
///
/// The display strings are what clients receive as the error detail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Activity not found")]
    ActivityNotFound { activity: String },

    #[error("Student is already signed up for this activity")]
    AlreadyRegistered { activity: String, email: String },

    #[error("Student is not signed up for this activity")]
    NotRegistered { activity: String, email: String },
}

/// Shared handle to the activity table
#[derive(Clone, Debug, Default)]
pub struct ActivityRegistry {
    table: Arc<RwLock<ActivityTable>>,
}

impl ActivityRegistry {
    pub fn new(table: ActivityTable) -> Self {
        Self {
            table: Arc::new(RwLock::new(table)),
        }
    }

    /// Registry populated with the built-in school activities
    pub fn seeded() -> Self {
        Self::new(default_activities())
    }

    /// Snapshot of the whole table
    pub async fn list(&self) -> ActivityTable {
        self.table.read().await.clone()
    }

    pub async fn get(&self, activity_name: &str) -> Option<Activity> {
        self.table.read().await.get(activity_name).cloned()
    }

    pub async fn activity_count(&self) -> usize {
        self.table.read().await.len()
    }

    /// Append `email` to the participants of `activity_name`.
    ///
    /// Returns the updated activity.
    pub async fn signup(&self, activity_name: &str, email: &str) -> Result<Activity, RegistryError> {
        let mut table = self.table.write().await;
        let activity = table
            .get_mut(activity_name)
            .ok_or_else(|| RegistryError::ActivityNotFound {
                activity: activity_name.to_string(),
            })?;

        if activity.is_registered(email) {
            return Err(RegistryError::AlreadyRegistered {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }

        activity.participants.push(email.to_string());
        Ok(activity.clone())
    }

    /// Remove `email` from the participants of `activity_name`, keeping the
    /// order of everyone else.
    pub async fn unregister(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<Activity, RegistryError> {
        let mut table = self.table.write().await;
        let activity = table
            .get_mut(activity_name)
            .ok_or_else(|| RegistryError::ActivityNotFound {
                activity: activity_name.to_string(),
            })?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| RegistryError::NotRegistered {
                activity: activity_name.to_string(),
                email: email.to_string(),
            })?;

        activity.participants.remove(position);
        Ok(activity.clone())
    }

    /// Replace the whole table, e.g. to restore a seed snapshot
    pub async fn reset(&self, table: ActivityTable) {
        *self.table.write().await = table;
    }
}

use std::collections::{HashMap, HashSet};

use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::{seed_catalog, Activity};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student already signed up for this activity")]
    DuplicateSignup,

    #[error("Student not signed up for this activity")]
    NotSignedUp,
}

/// In-memory catalog of activities. Built once at startup and shared with
/// every handler through an `Arc`; the lock serializes mutations so
/// concurrent signups against the same activity cannot lose updates.
pub struct Catalog {
    activities: RwLock<HashMap<String, Activity>>,
}

impl Catalog {
    pub fn new(activities: HashMap<String, Activity>) -> Self {
        Self {
            activities: RwLock::new(activities),
        }
    }

    pub fn with_seed_data() -> Self {
        Self::new(seed_catalog())
    }

    /// Full snapshot of the catalog, keyed by activity name.
    pub async fn list(&self) -> HashMap<String, Activity> {
        self.activities.read().await.clone()
    }

    pub async fn activity_names(&self) -> Vec<String> {
        self.activities.read().await.keys().cloned().collect()
    }

    /// All distinct participant emails across the catalog, in first-seen
    /// order per activity iteration.
    pub async fn participant_emails(&self) -> Vec<String> {
        let activities = self.activities.read().await;
        let mut seen = HashSet::new();
        let mut emails = Vec::new();
        for activity in activities.values() {
            for email in &activity.participants {
                if seen.insert(email.clone()) {
                    emails.push(email.clone());
                }
            }
        }
        emails
    }

    /// Sign a student up for an activity. Appends to the participant list,
    /// preserving signup order. Capacity is not checked.
    pub async fn signup(&self, activity_name: &str, email: &str) -> Result<(), CatalogError> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or(CatalogError::ActivityNotFound)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(CatalogError::DuplicateSignup);
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Remove a student from an activity's participant list.
    pub async fn remove(&self, activity_name: &str, email: &str) -> Result<(), CatalogError> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or(CatalogError::ActivityNotFound)?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(CatalogError::NotSignedUp)?;

        activity.participants.remove(position);
        Ok(())
    }
}

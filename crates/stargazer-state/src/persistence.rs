//! Persistence Bridge
//!
//! Typed access to the three storage entries the session keeps across
//! restarts. Reads are forgiving: anything absent or malformed is treated
//! as missing, so startup never fails on bad stored data.

use crate::state::SessionState;
use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use stargazer_client::{ImageRecord, User};
use stargazer_config::{Storage, StorageKey};
use std::sync::Arc;

/// The cached image as stored under `imageDetails`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageDetailsRecord {
    pub data: ImageRecord,
    /// UTC calendar date of the fetch, stored as YYYY-MM-DD
    #[serde(rename = "dateAdded")]
    pub date_added: NaiveDate,
}

/// Today's UTC calendar date, the value recorded as `dateAdded`
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Typed layer over a `Storage` backend
#[derive(Clone)]
pub struct PersistenceBridge {
    storage: Arc<dyn Storage>,
}

impl PersistenceBridge {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    fn load_json<T: serde::de::DeserializeOwned>(&self, key: StorageKey) -> Option<T> {
        let raw = self.storage.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Ignoring malformed stored {}: {}", key.as_str(), e);
                None
            }
        }
    }

    pub fn load_user(&self) -> Option<User> {
        self.load_json(StorageKey::User)
    }

    pub fn load_token(&self) -> Option<String> {
        self.storage
            .get(StorageKey::Token)
            .filter(|token| !token.is_empty())
    }

    pub fn load_image_details(&self) -> Option<ImageDetailsRecord> {
        self.load_json(StorageKey::ImageDetails)
    }

    /// Build the startup snapshot from storage
    ///
    /// A user without a token (or the reverse) is left over from an
    /// interrupted write and is dropped.
    pub fn seed_state(&self) -> SessionState {
        let (user, token) = match (self.load_user(), self.load_token()) {
            (Some(user), Some(token)) => (Some(user), Some(token)),
            (None, None) => (None, None),
            _ => {
                log::warn!("Stored session is incomplete, starting logged out");
                (None, None)
            }
        };

        let nasa_image_details = self.load_image_details().map(|record| record.data);

        log::info!(
            "Seeded session state (authenticated: {}, cached image: {})",
            user.is_some(),
            nasa_image_details.is_some()
        );

        SessionState {
            user,
            token,
            nasa_image_details,
            ..SessionState::default()
        }
    }

    /// Persist an established session
    pub fn save_session(&self, user: &User, token: &str) -> Result<()> {
        let user = serde_json::to_string(user).context("Failed to serialize user")?;
        self.storage.set(StorageKey::User, &user)?;
        self.storage.set(StorageKey::Token, token)?;
        Ok(())
    }

    /// Remove the stored session
    pub fn clear_session(&self) -> Result<()> {
        self.storage.remove(StorageKey::Token)?;
        self.storage.remove(StorageKey::User)?;
        Ok(())
    }

    /// Persist a fetched image with the date it was added
    pub fn save_image(&self, data: &ImageRecord, date_added: NaiveDate) -> Result<()> {
        let record = ImageDetailsRecord {
            data: data.clone(),
            date_added,
        };
        let json = serde_json::to_string(&record).context("Failed to serialize image details")?;
        self.storage.set(StorageKey::ImageDetails, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use stargazer_config::MemoryStorage;

    fn bridge() -> (PersistenceBridge, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        (PersistenceBridge::new(storage.clone()), storage)
    }

    fn user() -> User {
        serde_json::from_value(json!({
            "name": "A",
            "email": "a@x.com",
            "lastName": "B",
            "location": "Earth",
            "role": "admin"
        }))
        .unwrap()
    }

    #[test]
    fn test_session_round_trip_through_fresh_seed() {
        let (bridge, storage) = bridge();
        bridge.save_session(&user(), "t1").unwrap();

        // Fresh startup over the same storage
        let state = PersistenceBridge::new(storage).seed_state();
        assert_eq!(state.user, Some(user()));
        assert_eq!(state.token.as_deref(), Some("t1"));
        assert!(!state.is_loading);
        assert!(!state.show_alert);
    }

    #[test]
    fn test_empty_storage_seeds_defaults() {
        let (bridge, _) = bridge();
        assert_eq!(bridge.seed_state(), SessionState::default());
    }

    #[test]
    fn test_malformed_values_seed_defaults() {
        let (bridge, storage) = bridge();
        storage.set(StorageKey::User, "{not json").unwrap();
        storage.set(StorageKey::Token, "t1").unwrap();
        storage.set(StorageKey::ImageDetails, "[]").unwrap();

        assert_eq!(bridge.seed_state(), SessionState::default());
    }

    #[test]
    fn test_half_written_session_is_dropped() {
        let (bridge, storage) = bridge();
        storage.set(StorageKey::Token, "t1").unwrap();

        let state = bridge.seed_state();
        assert!(state.user.is_none());
        assert!(state.token.is_none());
    }

    #[test]
    fn test_clear_session_keeps_image() {
        let (bridge, storage) = bridge();
        bridge.save_session(&user(), "t1").unwrap();
        bridge
            .save_image(&ImageRecord::default(), NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
            .unwrap();

        bridge.clear_session().unwrap();

        assert!(storage.get(StorageKey::User).is_none());
        assert!(storage.get(StorageKey::Token).is_none());
        assert!(storage.get(StorageKey::ImageDetails).is_some());
    }

    #[test]
    fn test_image_record_layout() {
        let (bridge, storage) = bridge();
        let data = ImageRecord {
            title: Some("Orion".to_string()),
            ..ImageRecord::default()
        };
        bridge
            .save_image(&data, NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
            .unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&storage.get(StorageKey::ImageDetails).unwrap()).unwrap();
        assert_eq!(
            raw,
            json!({"data": {"title": "Orion"}, "dateAdded": "2026-10-19"})
        );

        let state = bridge.seed_state();
        assert_eq!(state.nasa_image_details, Some(data));
    }
}

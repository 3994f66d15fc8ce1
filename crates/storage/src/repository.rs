use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use course_core::model::Theme;
use thiserror::Error;

/// The single key under which the theme preference is persisted.
pub const THEME_KEY: &str = "theme";

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository contract for persisted UI preferences.
///
/// The app stores exactly one preference today (the theme flag under
/// [`THEME_KEY`]), but the contract is a plain key/value store so the schema
/// does not churn when another preference appears.
#[async_trait]
pub trait PreferencesRepository: Send + Sync {
    /// Fetch a preference value by key. `Ok(None)` means nothing persisted.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend failure.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Persist or overwrite a preference value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Typed accessors over the key/value contract.
pub struct Preferences;

impl Preferences {
    /// Read the persisted theme, if any.
    ///
    /// A value that fails to parse is treated as a serialization error so the
    /// caller can fall back to the default instead of rendering garbage.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on backend failure or an unparseable value.
    pub async fn theme(
        repo: &dyn PreferencesRepository,
    ) -> Result<Option<Theme>, StorageError> {
        let Some(raw) = repo.get(THEME_KEY).await? else {
            return Ok(None);
        };
        raw.parse::<Theme>()
            .map(Some)
            .map_err(|err| StorageError::Serialization(err.to_string()))
    }

    /// Persist the theme under the single well-known key.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    pub async fn save_theme(
        repo: &dyn PreferencesRepository,
        theme: Theme,
    ) -> Result<(), StorageError> {
        repo.set(THEME_KEY, theme.as_str()).await
    }
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    values: Arc<Mutex<std::collections::HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferencesRepository for InMemoryRepository {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Aggregates the preference repository behind a trait object for easy
/// backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub preferences: Arc<dyn PreferencesRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            preferences: Arc::new(InMemoryRepository::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryRepository, Preferences, PreferencesRepository, THEME_KEY};
    use course_core::model::Theme;

    #[tokio::test]
    async fn theme_round_trips_through_key_value_contract() {
        let repo = InMemoryRepository::new();
        assert!(Preferences::theme(&repo).await.unwrap().is_none());

        Preferences::save_theme(&repo, Theme::Dark).await.unwrap();
        assert_eq!(Preferences::theme(&repo).await.unwrap(), Some(Theme::Dark));

        Preferences::save_theme(&repo, Theme::Light).await.unwrap();
        assert_eq!(Preferences::theme(&repo).await.unwrap(), Some(Theme::Light));
    }

    #[tokio::test]
    async fn unparseable_persisted_theme_is_a_serialization_error() {
        let repo = InMemoryRepository::new();
        repo.set(THEME_KEY, "sepia").await.unwrap();
        assert!(Preferences::theme(&repo).await.is_err());
    }
}

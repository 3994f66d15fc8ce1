use std::sync::Arc;

use course_core::model::Theme;
use storage::repository::{Preferences, PreferencesRepository, StorageError};

use crate::error::ThemeServiceError;

/// Loads and persists the process-wide theme preference.
///
/// The live value is owned by the UI's theme provider; this service is only
/// the persistence edge behind it.
#[derive(Clone)]
pub struct ThemeService {
    repo: Arc<dyn PreferencesRepository>,
}

impl ThemeService {
    #[must_use]
    pub fn new(repo: Arc<dyn PreferencesRepository>) -> Self {
        Self { repo }
    }

    /// Load the persisted theme, or the default if nothing is stored.
    ///
    /// A stored value that no longer parses is treated as absent (the default
    /// wins) rather than wedging startup on a corrupt row.
    ///
    /// # Errors
    ///
    /// Returns `ThemeServiceError` on storage failures.
    pub async fn load(&self) -> Result<Theme, ThemeServiceError> {
        match Preferences::theme(self.repo.as_ref()).await {
            Ok(theme) => Ok(theme.unwrap_or_default()),
            Err(StorageError::Serialization(detail)) => {
                tracing::warn!(%detail, "ignoring unparseable persisted theme");
                Ok(Theme::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Persist a new theme value.
    ///
    /// # Errors
    ///
    /// Returns `ThemeServiceError` if persistence fails.
    pub async fn save(&self, theme: Theme) -> Result<(), ThemeServiceError> {
        Preferences::save_theme(self.repo.as_ref(), theme).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use course_core::model::Theme;
    use storage::repository::{
        InMemoryRepository, PreferencesRepository, StorageError, THEME_KEY,
    };

    use super::ThemeService;

    struct FailingRepo;

    #[async_trait::async_trait]
    impl PreferencesRepository for FailingRepo {
        async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Connection("fail".to_string()))
        }

        async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Connection("fail".to_string()))
        }
    }

    #[tokio::test]
    async fn load_defaults_when_nothing_is_persisted() {
        let service = ThemeService::new(Arc::new(InMemoryRepository::new()));
        assert_eq!(service.load().await.unwrap(), Theme::default());
    }

    #[tokio::test]
    async fn save_then_load_returns_the_persisted_value() {
        let service = ThemeService::new(Arc::new(InMemoryRepository::new()));
        service.save(Theme::Dark).await.unwrap();
        assert_eq!(service.load().await.unwrap(), Theme::Dark);

        // A second service over the same repository sees the same value, the
        // reload-after-restart path.
        let repo = Arc::new(InMemoryRepository::new());
        let first = ThemeService::new(repo.clone());
        first.save(Theme::Dark).await.unwrap();
        let second = ThemeService::new(repo);
        assert_eq!(second.load().await.unwrap(), Theme::Dark);
    }

    #[tokio::test]
    async fn load_falls_back_to_default_on_corrupt_value() {
        let repo = Arc::new(InMemoryRepository::new());
        repo.set(THEME_KEY, "sepia").await.unwrap();
        let service = ThemeService::new(repo);
        assert_eq!(service.load().await.unwrap(), Theme::default());
    }

    #[tokio::test]
    async fn backend_failures_propagate() {
        let service = ThemeService::new(Arc::new(FailingRepo));
        assert!(service.load().await.is_err());
        assert!(service.save(Theme::Dark).await.is_err());
    }
}

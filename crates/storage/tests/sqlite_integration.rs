use course_core::model::Theme;
use storage::repository::{Preferences, PreferencesRepository, Storage, THEME_KEY};
use storage::sqlite::SqliteRepository;

#[tokio::test]
async fn sqlite_roundtrip_persists_theme_preference() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_theme?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert!(Preferences::theme(&repo).await.expect("read").is_none());

    Preferences::save_theme(&repo, Theme::Dark)
        .await
        .expect("save");
    assert_eq!(
        Preferences::theme(&repo).await.expect("read"),
        Some(Theme::Dark)
    );

    // Overwrite under the same key, not a second row.
    Preferences::save_theme(&repo, Theme::Light)
        .await
        .expect("save");
    assert_eq!(
        Preferences::theme(&repo).await.expect("read"),
        Some(Theme::Light)
    );
}

#[tokio::test]
async fn sqlite_migration_is_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.migrate().await.expect("second migrate");

    repo.set(THEME_KEY, Theme::Dark.as_str())
        .await
        .expect("set");
    assert_eq!(
        repo.get(THEME_KEY).await.expect("get").as_deref(),
        Some("dark")
    );
}

#[tokio::test]
async fn storage_facade_builds_over_sqlite() {
    let storage = Storage::sqlite("sqlite:file:memdb_facade?mode=memory&cache=shared")
        .await
        .expect("storage");

    Preferences::save_theme(storage.preferences.as_ref(), Theme::Dark)
        .await
        .expect("save");
    assert_eq!(
        Preferences::theme(storage.preferences.as_ref())
            .await
            .expect("read"),
        Some(Theme::Dark)
    );
}

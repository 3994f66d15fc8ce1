use std::sync::Arc;

use course_core::model::{Day, Theme};
use storage::repository::{Preferences, PreferencesRepository, Storage, StorageError};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_storage};

struct FailingPreferencesRepo;

#[async_trait::async_trait]
impl PreferencesRepository for FailingPreferencesRepo {
    async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_every_section() {
    let mut harness = setup_view_harness(ViewKind::Home).await;
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Course Overview"), "missing overview in {html}");
    assert!(
        html.contains("Interactive MongoDB Demo"),
        "missing demo in {html}"
    );
    assert!(
        html.contains("Meet Your Instructor"),
        "missing instructor in {html}"
    );
    assert!(
        html.contains("Resources &amp; Materials") || html.contains("Resources & Materials"),
        "missing resources in {html}"
    );
    assert!(html.contains("countdown"), "missing countdown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_demo_shows_the_first_example_and_its_result() {
    let mut harness = setup_view_harness(ViewKind::Home).await;
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    // Default selection is the first example; its canned result is shown
    // without any run having happened.
    assert!(html.contains("Insert Document"), "missing title in {html}");
    assert!(html.contains("insertedId"), "missing canned result in {html}");
    assert!(html.contains("Run"), "missing run button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn day_one_view_smoke_renders_sessions_collapsed() {
    let mut harness = setup_view_harness(ViewKind::Day(Day::One)).await;
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("NoSQL Foundations"),
        "missing day title in {html}"
    );
    assert!(
        html.contains("Introduction to NoSQL"),
        "missing session title in {html}"
    );
    assert!(
        html.contains("MongoDB Basics &amp; First Hands-on")
            || html.contains("MongoDB Basics & First Hands-on"),
        "missing last session in {html}"
    );
    // All sessions start collapsed; expanded-only content is absent.
    assert!(
        !html.contains("Key Topics:"),
        "accordion should start collapsed in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn day_two_view_smoke_renders_sessions() {
    let mut harness = setup_view_harness(ViewKind::Day(Day::Two)).await;
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Advanced MongoDB"),
        "missing day title in {html}"
    );
    assert!(
        html.contains("Aggregation Framework"),
        "missing session in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn theme_provider_shows_loading_until_preference_resolves() {
    let mut harness = setup_view_harness(ViewKind::Home).await;
    harness.rebuild();

    let html = harness.render();
    assert!(
        html.contains("Loading MongoDB Course"),
        "missing loading overlay in {html}"
    );

    harness.drive_async().await;
    let html = harness.render();
    assert!(
        !html.contains("Loading MongoDB Course"),
        "loading overlay should clear in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn theme_provider_renders_content_when_the_preference_store_fails() {
    let storage = Storage {
        preferences: Arc::new(FailingPreferencesRepo),
    };

    let mut harness = setup_view_harness_with_storage(ViewKind::Home, storage).await;
    harness.rebuild();
    harness.drive_async().await;

    // The default theme stands in; the failure never blocks the page.
    let html = harness.render();
    assert!(html.contains("Course Overview"), "missing content in {html}");
    assert!(
        !html.contains("Loading MongoDB Course"),
        "loading overlay should clear in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn theme_provider_loads_a_persisted_preference() {
    let storage = Storage::in_memory();
    Preferences::save_theme(storage.preferences.as_ref(), Theme::Dark)
        .await
        .expect("persist theme");

    let mut harness = setup_view_harness_with_storage(ViewKind::Home, storage).await;
    harness.rebuild();
    harness.drive_async().await;

    // The provider resolved without error: the page content is up.
    let html = harness.render();
    assert!(html.contains("Course Overview"), "missing content in {html}");
}

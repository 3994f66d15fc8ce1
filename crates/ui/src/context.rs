use std::sync::Arc;

use services::ThemeService;

/// What the composition root (crates/app, or the test harness) must provide
/// to the UI.
pub trait UiApp: Send + Sync {
    fn theme_service(&self) -> Arc<ThemeService>;
}

#[derive(Clone)]
pub struct AppContext {
    theme_service: Arc<ThemeService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            theme_service: app.theme_service(),
        }
    }

    #[must_use]
    pub fn theme_service(&self) -> Arc<ThemeService> {
        Arc::clone(&self.theme_service)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

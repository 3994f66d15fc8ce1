use std::sync::Arc;

use dioxus::prelude::*;

use course_core::model::Theme;
use services::ThemeService;

use crate::components::Loading;
use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};

/// The one owner of the live theme flag.
///
/// Every consumer reads the same signal, so a write is visible synchronously
/// across the tree; persistence happens off the write path and never blocks
/// the UI.
#[derive(Clone)]
pub struct ThemeContext {
    theme: Signal<Theme>,
    service: Arc<ThemeService>,
}

impl ThemeContext {
    #[must_use]
    pub fn theme(&self) -> Theme {
        (self.theme)()
    }

    pub fn set(&self, next: Theme) {
        let mut theme = self.theme;
        theme.set(next);

        let service = Arc::clone(&self.service);
        spawn(async move {
            if let Err(err) = service.save(next).await {
                // The toggle already took effect on screen; losing the
                // preference across restarts is the only consequence.
                tracing::warn!(%err, "failed to persist theme preference");
            }
        });
    }

    pub fn toggle(&self) {
        self.set(self.theme().toggled());
    }
}

/// Read the shared theme context. Panics if no [`ThemeProvider`] is above
/// the caller, which is a wiring bug.
#[must_use]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}

/// Wraps the app with the theme flag, initialized from the persisted
/// preference. Children render once loading settles; until then the
/// full-screen loading overlay holds the frame.
#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let ctx = use_context::<AppContext>();
    let service = ctx.theme_service();

    let theme = use_signal(Theme::default);
    let mut initialized = use_signal(|| false);

    let service_for_load = Arc::clone(&service);
    let resource = use_resource(move || {
        let service = Arc::clone(&service_for_load);
        async move { service.load().await.map_err(|_| ViewError::Unknown) }
    });
    let state = view_state_from_resource(&resource);

    use_context_provider(|| ThemeContext { theme, service });

    use_effect(move || {
        let loaded = resource
            .value()
            .read()
            .as_ref()
            .and_then(|value| value.as_ref().ok().copied());
        if let Some(loaded) = loaded {
            if !initialized() {
                initialized.set(true);
                let mut theme = theme;
                theme.set(loaded);
            }
        }
    });

    match state {
        ViewState::Idle | ViewState::Loading => rsx! {
            Loading {}
        },
        // A load error means no persisted preference is recoverable; the
        // default theme is already in the signal, so render normally.
        ViewState::Ready(_) | ViewState::Error(_) => rsx! {
            {children}
        },
    }
}

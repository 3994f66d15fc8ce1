use std::time::Duration;

use dioxus::prelude::*;

/// Single-open disclosure state for an accordion list.
///
/// Selecting the already-active item collapses everything; selecting another
/// item moves the single expansion there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Disclosure<T> {
    active: Option<T>,
}

impl<T> Default for Disclosure<T> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<T: Copy + PartialEq> Disclosure<T> {
    pub fn select(&mut self, id: T) {
        if self.active == Some(id) {
            self.active = None;
        } else {
            self.active = Some(id);
        }
    }

    #[must_use]
    pub fn active(&self) -> Option<T> {
        self.active
    }

    #[must_use]
    pub fn is_open(&self, id: T) -> bool {
        self.active == Some(id)
    }
}

/// Exactly-one-active selection over a closed set (day tabs, demo queries).
///
/// Unlike [`Disclosure`], re-selecting the active key keeps it active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selector<T> {
    active: T,
}

impl<T: Copy + PartialEq> Selector<T> {
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self { active: initial }
    }

    pub fn select(&mut self, key: T) {
        self.active = key;
    }

    #[must_use]
    pub fn active(&self) -> T {
        self.active
    }

    #[must_use]
    pub fn is_active(&self, key: T) -> bool {
        self.active == key
    }
}

impl<T: Copy + PartialEq + Default> Default for Selector<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// How long the fake "Run" button pretends to work before settling.
pub const FAKE_RUN_DELAY: Duration = Duration::from_millis(1500);

/// Running-flag state for the fake query runner.
///
/// Each `begin` hands out a new generation and invalidates any reset still
/// in flight, so overlapping runs keep the flag raised until the latest
/// deadline; a stale reset is ignored instead of cutting a newer run short.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DemoRun {
    running: bool,
    generation: u64,
}

impl DemoRun {
    /// Raise the running flag and return the generation token the matching
    /// `finish` call must present.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.running = true;
        self.generation
    }

    /// Lower the running flag, but only if no newer `begin` superseded the
    /// caller's token.
    pub fn finish(&mut self, generation: u64) {
        if self.generation == generation {
            self.running = false;
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message() -> &'static str {
        "Something went wrong. Please try again."
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}

#[cfg(test)]
mod tests {
    use super::{DemoRun, Disclosure, Selector};

    #[test]
    fn disclosure_tracks_the_last_selected_id() {
        let mut accordion = Disclosure::default();
        accordion.select(1u32);
        accordion.select(3);
        accordion.select(2);
        assert_eq!(accordion.active(), Some(2));
        assert!(accordion.is_open(2));
        assert!(!accordion.is_open(3));
    }

    #[test]
    fn disclosure_reselect_collapses() {
        let mut accordion = Disclosure::default();
        accordion.select(7u32);
        accordion.select(7);
        assert_eq!(accordion.active(), None);

        // Selecting again after a collapse re-expands.
        accordion.select(7);
        assert_eq!(accordion.active(), Some(7));
    }

    #[test]
    fn disclosure_keeps_at_most_one_open() {
        let mut accordion = Disclosure::default();
        for id in 0u32..5 {
            accordion.select(id);
            let open: Vec<u32> = (0..5).filter(|&i| accordion.is_open(i)).collect();
            assert_eq!(open, vec![id]);
        }
    }

    #[test]
    fn selector_is_idempotent_unlike_disclosure() {
        let mut tabs = Selector::new("day1");
        tabs.select("day2");
        tabs.select("day2");
        assert_eq!(tabs.active(), "day2");
        assert!(tabs.is_active("day2"));
    }

    #[test]
    fn demo_run_round_trip() {
        let mut run = DemoRun::default();
        assert!(!run.is_running());
        let token = run.begin();
        assert!(run.is_running());
        run.finish(token);
        assert!(!run.is_running());
    }

    #[test]
    fn overlapping_runs_keep_the_flag_until_the_last_deadline() {
        let mut run = DemoRun::default();
        let first = run.begin();
        let second = run.begin();

        // The first run's reset fires while the second is still pending; it
        // must be ignored.
        run.finish(first);
        assert!(run.is_running());

        run.finish(second);
        assert!(!run.is_running());
    }

    #[test]
    fn stale_finish_after_completion_is_harmless() {
        let mut run = DemoRun::default();
        let first = run.begin();
        run.finish(first);
        let second = run.begin();
        run.finish(first);
        assert!(run.is_running());
        run.finish(second);
        assert!(!run.is_running());
    }
}

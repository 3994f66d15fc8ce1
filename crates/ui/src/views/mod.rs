mod day;
mod home;
mod state;
mod theme;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use day::DayView;
pub use home::HomeView;
pub use state::{
    DemoRun, Disclosure, FAKE_RUN_DELAY, Selector, ViewError, ViewState, view_state_from_resource,
};
pub use theme::{ThemeContext, ThemeProvider, use_theme};

mod day;
mod ids;
mod query_example;
mod schedule;
mod session;
mod snippet;
mod theme;

pub use day::Day;
pub use ids::SessionId;
pub use query_example::QueryExample;
pub use schedule::{DaySchedule, ScheduleEntry};
pub use session::{
    CourseDay, DetailBlock, DetailCard, FactCard, LabeledSnippet, Session, SessionKind,
};
pub use snippet::{Language, Snippet};
pub use theme::{Theme, ThemeParseError};

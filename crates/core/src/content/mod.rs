//! Static course content tables.
//!
//! Everything here is read-only data compiled into the binary: the two day
//! programs, the home-page overview schedule, the interactive demo queries,
//! and the site chrome (instructor, resources, footer). Components render
//! slices of these tables; nothing mutates them.

mod day_one;
mod day_two;
mod demo;
mod overview;
mod site;

use chrono::{DateTime, Utc};

use crate::model::{CourseDay, Day, DaySchedule, QueryExample};

pub use site::{
    ABOUT_BLURB, CONTACT, COPYRIGHT, ContactLink, HERO, HeroContent, INSTRUCTOR, Instructor,
    LinkKind, QUICK_LINKS, RESOURCES, Resource, ResourceCategory, SiteContact,
};

/// Full content set for a day page.
#[must_use]
pub fn course_day(day: Day) -> &'static CourseDay {
    match day {
        Day::One => &day_one::DAY_ONE,
        Day::Two => &day_two::DAY_TWO,
    }
}

/// Home-page overview schedules, one per day, in display order.
#[must_use]
pub fn overview() -> &'static [DaySchedule] {
    &overview::OVERVIEW
}

/// Overview schedule for a single day.
#[must_use]
pub fn day_schedule(day: Day) -> &'static DaySchedule {
    match day {
        Day::One => &overview::OVERVIEW[0],
        Day::Two => &overview::OVERVIEW[1],
    }
}

/// The canned queries behind the interactive demo panel.
#[must_use]
pub fn demo_queries() -> &'static [QueryExample] {
    &demo::DEMO_QUERIES
}

/// Moment the course opens; the hero countdown ticks toward this.
///
/// # Panics
///
/// Panics if the compiled-in timestamp cannot be represented, which would be
/// a content-table defect.
#[must_use]
pub fn course_start() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(site::COURSE_START_TIMESTAMP, 0)
        .expect("course start timestamp should be valid")
}

#[cfg(test)]
mod tests {
    use super::{course_day, demo_queries, overview};
    use crate::model::Day;

    #[test]
    fn both_days_have_sessions_with_unique_ids() {
        for day in Day::ALL {
            let content = course_day(day);
            assert_eq!(content.day, day);
            assert!(!content.sessions.is_empty());
            for pair in content.sessions.windows(2) {
                assert!(pair[0].id < pair[1].id, "session ids must be ascending");
            }
        }
    }

    #[test]
    fn overview_covers_both_days_in_order() {
        let days: Vec<Day> = overview().iter().map(|schedule| schedule.day).collect();
        assert_eq!(days, Day::ALL.to_vec());
    }

    #[test]
    fn every_demo_query_has_a_canned_result() {
        assert!(!demo_queries().is_empty());
        for example in demo_queries() {
            assert!(example.result.is_some(), "{} needs a result", example.title);
        }
    }
}

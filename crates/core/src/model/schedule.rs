use crate::model::{Day, SessionKind};

/// One timeslot in the home-page course overview.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub time: &'static str,
    pub title: &'static str,
    pub kind: SessionKind,
    pub topics: &'static [&'static str],
}

/// The overview schedule for one day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DaySchedule {
    pub day: Day,
    pub title: &'static str,
    pub entries: &'static [ScheduleEntry],
}

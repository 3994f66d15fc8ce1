use chrono::{DateTime, Utc};

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// How often the owning view recomputes the breakdown while mounted.
pub const TICK: std::time::Duration = std::time::Duration::from_secs(1);

/// Human-readable remaining time toward a fixed target.
///
/// Components are clamped to zero once the target passes; `arrived` flips
/// instead of letting negative values through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Remaining {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub arrived: bool,
}

impl Remaining {
    /// A zeroed breakdown with the arrived flag set.
    #[must_use]
    pub fn arrived() -> Self {
        Self {
            arrived: true,
            ..Self::default()
        }
    }
}

/// Decompose `target - now` into days/hours/minutes/seconds with floor
/// semantics (integer division by ms-per-unit).
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub fn remaining(target: DateTime<Utc>, now: DateTime<Utc>) -> Remaining {
    let distance = target.signed_duration_since(now).num_milliseconds();
    if distance <= 0 {
        return Remaining::arrived();
    }

    Remaining {
        days: (distance / MS_PER_DAY) as u64,
        hours: (distance % MS_PER_DAY / MS_PER_HOUR) as u64,
        minutes: (distance % MS_PER_HOUR / MS_PER_MINUTE) as u64,
        seconds: (distance % MS_PER_MINUTE / MS_PER_SECOND) as u64,
        arrived: false,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::{Remaining, remaining};
    use crate::time::fixed_now;

    #[test]
    fn decomposes_a_mixed_distance() {
        let now = fixed_now();
        let target =
            now + Duration::days(1) + Duration::hours(2) + Duration::minutes(3) + Duration::seconds(5);
        assert_eq!(
            remaining(target, now),
            Remaining {
                days: 1,
                hours: 2,
                minutes: 3,
                seconds: 5,
                arrived: false,
            }
        );
    }

    #[test]
    fn floors_partial_seconds() {
        let now = fixed_now();
        let target = now + Duration::milliseconds(1_999);
        let breakdown = remaining(target, now);
        assert_eq!(breakdown.seconds, 1);
        assert!(!breakdown.arrived);
    }

    #[test]
    fn clamps_at_the_target() {
        let now = fixed_now();
        assert_eq!(remaining(now, now), Remaining::arrived());
    }

    #[test]
    fn clamps_past_the_target() {
        let now = fixed_now();
        let target = now - Duration::hours(6);
        let breakdown = remaining(target, now);
        assert!(breakdown.arrived);
        assert_eq!((breakdown.days, breakdown.hours), (0, 0));
        assert_eq!((breakdown.minutes, breakdown.seconds), (0, 0));
    }
}

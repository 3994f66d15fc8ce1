use dioxus::prelude::*;

use course_core::Clock;
use course_core::content;
use course_core::countdown;

use crate::vm::two_digits;

/// Live countdown toward the course start.
///
/// The tick loop lives in the component's own scope, so dropping the
/// component (navigation, shutdown) cancels it with no tick able to fire
/// afterwards. Tests inject a fixed clock to pin the rendered breakdown.
#[component]
pub fn CountdownBanner(#[props(default)] clock: Clock) -> Element {
    let target = content::course_start();
    let mut remaining = use_signal(|| countdown::remaining(target, clock.now()));

    use_future(move || async move {
        loop {
            tokio::time::sleep(countdown::TICK).await;
            remaining.set(countdown::remaining(target, clock.now()));
        }
    });

    let value = remaining();
    if value.arrived {
        return rsx! {
            p { class: "countdown countdown-arrived", "The course is underway — welcome!" }
        };
    }

    rsx! {
        div { class: "countdown",
            p { class: "countdown-label", "Course starts in" }
            div { class: "countdown-units",
                CountdownUnit { value: value.days, unit: "days" }
                CountdownUnit { value: value.hours, unit: "hours" }
                CountdownUnit { value: value.minutes, unit: "minutes" }
                CountdownUnit { value: value.seconds, unit: "seconds" }
            }
        }
    }
}

#[component]
fn CountdownUnit(value: u64, unit: &'static str) -> Element {
    let padded = two_digits(value);
    rsx! {
        div { class: "countdown-unit",
            span { class: "countdown-value", "{padded}" }
            span { class: "countdown-unit-label", "{unit}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use dioxus::prelude::*;

    use course_core::Clock;
    use course_core::content;

    use super::{CountdownBanner, CountdownBannerProps};

    fn render_with_clock(clock: Clock) -> String {
        let mut dom = VirtualDom::new_with_props(
            CountdownBanner,
            CountdownBannerProps::builder().clock(clock).build(),
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[tokio::test(flavor = "current_thread")]
    async fn renders_the_exact_breakdown_for_a_fixed_clock() {
        let now = content::course_start()
            - Duration::days(1)
            - Duration::hours(2)
            - Duration::minutes(3)
            - Duration::seconds(5);
        let html = render_with_clock(Clock::fixed(now));

        for expected in ["01", "02", "03", "05", "days", "seconds"] {
            assert!(html.contains(expected), "missing {expected} in {html}");
        }
        assert!(!html.contains("underway"), "should not have arrived: {html}");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn shows_arrival_once_the_target_has_passed() {
        let now = content::course_start() + Duration::seconds(1);
        let html = render_with_clock(Clock::fixed(now));
        assert!(html.contains("underway"), "missing arrival copy in {html}");
        assert!(!html.contains("countdown-units"), "no tiles after arrival: {html}");
    }
}

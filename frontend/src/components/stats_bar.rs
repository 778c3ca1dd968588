use std::f64::consts::PI;
use std::ops::ControlFlow;

use yew::prelude::*;

use crate::components::language::use_language;
use crate::utils::frame::FrameLoop;

pub const COUNT_DURATION_MS: f64 = 1200.0;

/// Ease-in-out value of a counter heading to `to`, at `progress` in [0, 1].
pub fn eased_count(to: u64, progress: f64) -> u64 {
    let p = progress.clamp(0.0, 1.0);
    (to as f64 * (0.5 - (PI * p).cos() / 2.0)).floor() as u64
}

pub fn format_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(digit);
    }
    out
}

/// Counts from 0 up to `to` over `duration_ms`, one step per display frame.
#[hook]
pub fn use_count(to: u64, duration_ms: f64) -> u64 {
    let value = use_state(|| 0u64);

    {
        let value = value.clone();
        use_effect_with_deps(
            move |&(to, duration): &(u64, f64)| {
                let mut start: Option<f64> = None;
                let frames = FrameLoop::start(move |timestamp| {
                    let start = *start.get_or_insert(timestamp);
                    let progress = if duration > 0.0 {
                        ((timestamp - start) / duration).min(1.0)
                    } else {
                        1.0
                    };
                    value.set(eased_count(to, progress));
                    if progress < 1.0 {
                        ControlFlow::Continue(())
                    } else {
                        ControlFlow::Break(())
                    }
                });
                move || drop(frames)
            },
            (to, duration_ms),
        );
    }

    *value
}

#[function_component(StatsBar)]
pub fn stats_bar() -> Html {
    let language = use_language();
    let copy = &language.content().stats;
    let records = use_count(120_000, COUNT_DURATION_MS);
    let uptime = use_count(99, COUNT_DURATION_MS);
    let countries = use_count(6, COUNT_DURATION_MS);

    let stat = |value: String, label: &'static str| {
        html! {
            <div class="stat">
                <div class="stat-value">{value}</div>
                <div class="stat-label">{label}</div>
            </div>
        }
    };

    html! {
        <div class="stats-bar">
            { stat(format!("{}+", format_thousands(records, language.thousands_separator())), copy.records) }
            { stat(format!("{}.9%", uptime), copy.uptime) }
            { stat(countries.to_string(), copy.countries) }
            <style>{r#"
                .stats-bar {
                    margin: 2.5rem auto 0;
                    max-width: 48rem;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .stat {
                    border-radius: 0.75rem;
                    background: rgba(255, 255, 255, 0.7);
                    backdrop-filter: blur(8px);
                    border: 1px solid #e2e8f0;
                    padding: 1rem;
                    text-align: center;
                }
                .stat-value {
                    font-size: 1.875rem;
                    font-weight: 800;
                    color: #0f172a;
                    font-variant-numeric: tabular-nums;
                }
                .stat-label {
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    color: #64748b;
                }
                @media (max-width: 640px) {
                    .stats-bar {
                        gap: 0.75rem;
                    }
                    .stat-value {
                        font-size: 1.25rem;
                    }
                }
            "#}</style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_starts_at_zero_and_lands_on_target() {
        assert_eq!(eased_count(120_000, 0.0), 0);
        assert_eq!(eased_count(120_000, 1.0), 120_000);
        assert!((59_999..=60_000).contains(&eased_count(120_000, 0.5)));
        assert_eq!(eased_count(6, 7.0), 6);
    }

    #[test]
    fn counter_never_goes_backwards() {
        let mut last = 0;
        for step in 0..=100 {
            let value = eased_count(99, step as f64 / 100.0);
            assert!(value >= last);
            last = value;
        }
        assert_eq!(last, 99);
    }

    #[test]
    fn thousands_use_the_language_separator() {
        assert_eq!(format_thousands(120_000, ','), "120,000");
        assert_eq!(format_thousands(120_000, '.'), "120.000");
        assert_eq!(format_thousands(1_234_567, ','), "1,234,567");
        assert_eq!(format_thousands(999, ','), "999");
        assert_eq!(format_thousands(0, '.'), "0");
    }
}

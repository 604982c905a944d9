use jiff::{SignedDuration, Timestamp};

pub const SECONDS_PER_HOUR: f64 = 3600.0;

#[macro_export]
macro_rules! timer_debug {
    ($msg:literal,$block:expr) => {{
        let now = jiff::Timestamp::now();
        let result = $block;
        let elapsed = jiff::Timestamp::now().duration_since(now);

        tracing::debug!("{}: Took {:?}", $msg, elapsed);

        result
    }};
}

/// Converts a duration into fractional hours.
pub fn as_hours(duration: SignedDuration) -> f64 {
    duration.as_secs_f64() / SECONDS_PER_HOUR
}

/// Converts fractional hours into a duration, with nanosecond precision.
/// Saturates at [`SignedDuration::MAX`] and [`SignedDuration::MIN`].
pub fn from_hours(hours: f64) -> SignedDuration {
    SignedDuration::try_from_secs_f64(hours * SECONDS_PER_HOUR).unwrap_or(if hours < 0.0 {
        SignedDuration::MIN
    } else {
        SignedDuration::MAX
    })
}

/// `at` moved by `duration`, clamped to the representable timestamp range.
pub fn saturating_add(at: Timestamp, duration: SignedDuration) -> Timestamp {
    at.checked_add(duration).unwrap_or(if duration.is_negative() {
        Timestamp::MIN
    } else {
        Timestamp::MAX
    })
}

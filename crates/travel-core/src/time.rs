// crates/travel-core/src/time.rs

//! # Local Time Formatting
//!
//! Renders the current instant in a destination's IANA time zone using US
//! English 12-hour conventions, e.g. `3:04:05 PM`.

use crate::error::{Result, TravelError};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Shown when a destination has no time zone.
pub const TIME_ZONE_UNAVAILABLE: &str = "Time zone not available";

/// `en-US` 12-hour clock: unpadded hour, minute, second, AM/PM.
const EN_US_TIME_FORMAT: &str = "%-I:%M:%S %p";

/// Source of "now". Abstracted so renders can be reproduced in tests.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock of the running system (or of the browser under wasm).
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Parse an IANA identifier such as `Asia/Tokyo`.
pub fn parse_zone(zone: &str) -> Result<Tz> {
    zone.parse::<Tz>()
        .map_err(|_| TravelError::InvalidTimeZone(zone.to_string()))
}

/// Format `instant` in `zone`. Fails only if the zone is unknown.
pub fn format_at(zone: &str, instant: DateTime<Utc>) -> Result<String> {
    let tz = parse_zone(zone)?;
    Ok(instant.with_timezone(&tz).format(EN_US_TIME_FORMAT).to_string())
}

/// The text shown on a card for `time_zone`, never failing.
///
/// - no zone → [`TIME_ZONE_UNAVAILABLE`]
/// - unknown zone → `Invalid time zone: <id>` (and a logged warning)
pub fn display_time(time_zone: Option<&str>, clock: &dyn Clock) -> String {
    let Some(zone) = time_zone else {
        return TIME_ZONE_UNAVAILABLE.to_string();
    };
    match format_at(zone, clock.now()) {
        Ok(s) => s,
        Err(e) => {
            log::warn!("{e}");
            format!("Invalid time zone: {zone}")
        }
    }
}

/// Current time in `time_zone` according to the system clock.
pub fn format_now(time_zone: Option<&str>) -> String {
    display_time(time_zone, &SystemClock)
}

use chrono::{DateTime, FixedOffset};
use chrono_tz::Tz;
use tracing::debug;

pub const PLACEHOLDER: &str = "—";
const DISPLAY_FORMAT: &str = "%a, %b %d · %I:%M %p %Z";

/// Parse an ISO-8601 timestamp with an offset; a trailing `Z` means UTC.
///
/// Only the RFC 3339 profile is accepted. Offsets without a colon (`+0000`)
/// or naive timestamps are rejected; every provider here emits RFC 3339, so
/// those forms only show up as the placeholder in [`localize`].
pub fn parse_start_time(raw: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw.trim())
}

/// Render `raw` in `tz` for display, or [`PLACEHOLDER`] if it cannot be parsed.
pub fn localize(raw: &str, tz: Tz) -> String {
    match parse_start_time(raw) {
        Ok(dt) => dt.with_timezone(&tz).format(DISPLAY_FORMAT).to_string(),
        Err(e) => {
            debug!(raw, error = %e, "unparseable start time");
            PLACEHOLDER.to_string()
        }
    }
}

use crate::HourReading;

/// Whether the reading's condition text mentions fog anywhere.
///
/// This is a plain substring match: "no fog expected" still counts as foggy.
pub fn is_foggy(reading: &HourReading) -> bool {
    mentions_fog(&reading.short_forecast, &reading.detailed_forecast)
}

pub fn mentions_fog(short: &str, detailed: &str) -> bool {
    format!("{short} {detailed}").to_lowercase().contains("fog")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(short: &str, detailed: &str) -> HourReading {
        HourReading::new(15.0, 3.0, short, detailed, "", "NOAA")
    }

    #[test]
    fn fog_in_any_case_is_detected() {
        assert!(is_foggy(&reading("Patchy Fog", "")));
        assert!(is_foggy(&reading("FOGGY", "")));
        assert!(is_foggy(&reading("Cloudy", "Areas of dense fog before 10am.")));
        assert!(is_foggy(&reading("Foggy (fallback)", "Cloud 95%, visibility 3000 m")));
    }

    #[test]
    fn other_conditions_are_not_foggy() {
        assert!(!is_foggy(&reading("Partly Cloudy", "")));
        assert!(!is_foggy(&reading("Clear", "offline mock")));
    }

    #[test]
    fn negated_mentions_still_count() {
        assert!(mentions_fog("Sunny", "No fog expected"));
    }
}

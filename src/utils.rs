use chrono::NaiveDateTime;

/// Gateway representation of a schedule instant: zero-padded local time,
/// 24-hour clock, no seconds, no timezone offset.
pub const SCHEDULE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Crude validity heuristic carried over from the campaign composer: any
/// string longer than five characters counts as sendable. Dispatch code only
/// calls this predicate, so a real phone-number grammar can replace it
/// without touching the client.
pub fn is_plausible_recipient(number: &str) -> bool {
    number.len() > 5
}

pub fn format_schedule_time(at: NaiveDateTime) -> String {
    at.format(SCHEDULE_TIME_FORMAT).to_string()
}

pub fn parse_schedule_time(input: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(input.trim(), SCHEDULE_TIME_FORMAT)
}

pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn schedule_time_is_fixed_width_and_zero_padded() {
        let at = NaiveDate::from_ymd_opt(2026, 1, 5)
            .unwrap()
            .and_hms_opt(7, 5, 42)
            .unwrap();
        let formatted = format_schedule_time(at);
        assert_eq!(formatted, "2026-01-05 07:05");
        assert_eq!(formatted.len(), 16);
    }

    #[test]
    fn schedule_time_uses_24_hour_clock() {
        let at = NaiveDate::from_ymd_opt(2026, 11, 30)
            .unwrap()
            .and_hms_opt(23, 59, 0)
            .unwrap();
        assert_eq!(format_schedule_time(at), "2026-11-30 23:59");
    }

    #[test]
    fn parse_accepts_what_format_produces() {
        let parsed = parse_schedule_time("2026-03-07 08:05").unwrap();
        assert_eq!(format_schedule_time(parsed), "2026-03-07 08:05");
        assert!(parse_schedule_time("07/03/2026 8:05").is_err());
    }

    #[test]
    fn recipient_heuristic_cuts_at_five_characters() {
        assert!(!is_plausible_recipient(""));
        assert!(!is_plausible_recipient("12345"));
        assert!(is_plausible_recipient("123456"));
        assert!(is_plausible_recipient("8801711111111"));
    }

    #[test]
    fn normalize_url_adds_scheme_when_missing() {
        assert_eq!(normalize_url("gateway.example.com"), "https://gateway.example.com");
        assert_eq!(normalize_url(" http://gateway.example.com "), "http://gateway.example.com");
    }
}

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeZone};

const LOCAL_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

/// Parse a timestamp argument. RFC 3339 keeps its offset; a bare date-time
/// is read in the local timezone.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, String> {
    parse_timestamp_in(raw, &Local)
}

fn parse_timestamp_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> Result<DateTime<FixedOffset>, String> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt);
    }
    let naive = LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .ok_or_else(|| {
            format!("invalid timestamp '{raw}': expected RFC 3339 or YYYY-MM-DD HH:MM")
        })?;
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.fixed_offset())
        .ok_or_else(|| format!("'{raw}' does not exist in the local timezone"))
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, Utc};
    use pretty_assertions::assert_eq;

    use super::{parse_timestamp, parse_timestamp_in};

    #[test]
    fn keeps_explicit_offset() {
        let dt = parse_timestamp("2024-03-01T14:30:00+05:30").expect("rfc3339");
        assert_eq!(dt.offset().local_minus_utc(), 5 * 3600 + 1800);
        assert_eq!(
            dt.with_timezone(&Utc).to_rfc3339(),
            "2024-03-01T09:00:00+00:00"
        );
    }

    #[test]
    fn bare_datetime_uses_given_zone() {
        let ist = FixedOffset::east_opt(5 * 3600 + 1800).expect("offset");
        let dt = parse_timestamp_in("2024-03-01 14:30", &ist).expect("naive");
        assert_eq!(
            dt.with_timezone(&Utc).to_rfc3339(),
            "2024-03-01T09:00:00+00:00"
        );
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_timestamp("yesterday").expect_err("should fail");
        assert!(err.contains("invalid timestamp 'yesterday'"));
    }
}

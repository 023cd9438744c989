use time::OffsetDateTime;

const NANOS_PER_MILLI: i128 = 1_000_000;

/// Converts a ledger timestamp (nanoseconds since the Unix epoch) into an
/// [`OffsetDateTime`], truncating to millisecond precision.
///
/// The ledger only ever emits unsigned values, but replies pass through JSON
/// on the way here, so a signed value is tolerated and mapped to `None`
/// instead of wrapping around. Zero is a valid timestamp (the epoch).
pub fn from_ledger_ns(ns: impl Into<i128>) -> Option<OffsetDateTime> {
    let ns = ns.into();
    if ns < 0 {
        return None;
    }

    let millis = ns / NANOS_PER_MILLI;
    OffsetDateTime::from_unix_timestamp_nanos(millis * NANOS_PER_MILLI).ok()
}

/// Current time as a ledger timestamp.
pub fn now_ledger_ns() -> u64 {
    let ns = OffsetDateTime::now_utc().unix_timestamp_nanos();
    u64::try_from(ns).unwrap_or(0)
}

#[cfg(test)]
mod test {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn test_from_ledger_ns_truncates_to_millis() {
        let converted = from_ledger_ns(1_711_238_400_123_456_789u64)
            .expect("timestamp within range must convert");

        assert_eq!(converted, datetime!(2024-03-24 00:00:00.123 UTC));
    }

    #[test]
    fn test_from_ledger_ns_zero_is_epoch() {
        assert_eq!(from_ledger_ns(0u64), Some(OffsetDateTime::UNIX_EPOCH));
    }

    #[test]
    fn test_from_ledger_ns_rejects_negative() {
        assert_eq!(from_ledger_ns(-1i64), None);
        assert_eq!(from_ledger_ns(i64::MIN), None);
    }

    #[test]
    fn test_from_ledger_ns_handles_max_u64() {
        // year 2554, still well inside the representable range
        assert!(from_ledger_ns(u64::MAX).is_some());
    }
}

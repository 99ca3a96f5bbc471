#[cfg(test)]
mod tests {
    use timetrack::libs::clock::{clock_to_seconds, seconds_to_clock, MAX_SECONDS};
    use timetrack::libs::error::TrackerError;

    #[test]
    fn test_seconds_to_clock() {
        assert_eq!(seconds_to_clock(0), "00:00:00");
        assert_eq!(seconds_to_clock(59), "00:00:59");
        assert_eq!(seconds_to_clock(600), "00:10:00");
        assert_eq!(seconds_to_clock(3_661), "01:01:01");
        assert_eq!(seconds_to_clock(60_000), "16:40:00");
        // Hours do not wrap at a day.
        assert_eq!(seconds_to_clock(25 * 3_600), "25:00:00");
        assert_eq!(seconds_to_clock(1_000 * 3_600 + 5), "1000:00:05");
    }

    #[test]
    fn test_clock_to_seconds() {
        assert_eq!(clock_to_seconds("00:00:00").unwrap(), 0);
        assert_eq!(clock_to_seconds("01:01:01").unwrap(), 3_661);
        assert_eq!(clock_to_seconds("1:2:3").unwrap(), 3_723);
        assert_eq!(clock_to_seconds(" 00:10:00 ").unwrap(), 600);
        assert_eq!(clock_to_seconds("00:90:00").unwrap(), 5_400);
    }

    #[test]
    fn test_round_trip() {
        for seconds in [0, 1, 59, 60, 3_599, 3_600, 86_399, 86_400, 360_000, 1_234_567] {
            assert_eq!(clock_to_seconds(&seconds_to_clock(seconds)).unwrap(), seconds);
        }
    }

    #[test]
    fn test_malformed_clock() {
        for input in ["", "10", "00:10", "00:00:00:00", "aa:bb:cc", "01::00", "+1:00:00", "-1:00:00", "1.5:00:00"] {
            let err = clock_to_seconds(input).unwrap_err();
            assert!(matches!(err, TrackerError::Format(_)), "{input:?} should be rejected");
        }
    }

    #[test]
    fn test_overflow_is_an_error() {
        let err = clock_to_seconds("99999999999999999999:00:00").unwrap_err();
        assert!(matches!(err, TrackerError::Format(_)));

        let err = clock_to_seconds(&format!("{}:00:00", u64::MAX / 3_600 + 1)).unwrap_err();
        assert!(matches!(err, TrackerError::Format(_)));
    }

    #[test]
    fn test_largest_storable_duration() {
        // i64::MAX seconds is 2562047788015215:30:07.
        assert_eq!(clock_to_seconds("2562047788015215:30:07").unwrap(), MAX_SECONDS);
        assert_eq!(seconds_to_clock(MAX_SECONDS), "2562047788015215:30:07");

        for input in ["2562047788015215:30:08", "2562047788015216:00:00", "9999999999999999:00:00"] {
            let err = clock_to_seconds(input).unwrap_err();
            assert!(matches!(err, TrackerError::Format(_)), "{input:?} should be rejected");
        }
    }
}

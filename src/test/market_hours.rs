#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone};
    use chrono_tz::America::New_York;
    use chrono_tz::Tz;

    use crate::collector::market_hours::is_open_at;

    fn eastern(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Tz> {
        New_York.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn session_bounds_are_inclusive() {
        assert!(!is_open_at(eastern(2025, 6, 10, 9, 29)));
        assert!(is_open_at(eastern(2025, 6, 10, 9, 30)));
        assert!(is_open_at(eastern(2025, 6, 10, 12, 0)));
        assert!(is_open_at(eastern(2025, 6, 10, 16, 0)));
        assert!(!is_open_at(eastern(2025, 6, 10, 16, 1)));
    }

    #[test]
    fn weekends_are_closed() {
        assert!(!is_open_at(eastern(2025, 6, 14, 12, 0)));
        assert!(!is_open_at(eastern(2025, 6, 15, 12, 0)));
    }

    #[test]
    fn overnight_is_closed() {
        assert!(!is_open_at(eastern(2025, 6, 10, 3, 0)));
        assert!(!is_open_at(eastern(2025, 6, 10, 22, 0)));
    }
}

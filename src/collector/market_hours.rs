use chrono::{DateTime, Datelike, NaiveTime, Utc, Weekday};
use chrono_tz::America::New_York;
use chrono_tz::Tz;

pub fn is_market_open() -> bool {
    is_open_at(Utc::now().with_timezone(&New_York))
}

// Regular session, 9:30 to 16:00 US/Eastern, both ends inclusive.
pub fn is_open_at(now: DateTime<Tz>) -> bool {
    if matches!(now.weekday(), Weekday::Sat | Weekday::Sun) {
        return false;
    }
    let open = NaiveTime::from_hms_opt(9, 30, 0).unwrap();
    let close = NaiveTime::from_hms_opt(16, 0, 0).unwrap();
    let t = now.time();
    open <= t && t <= close
}

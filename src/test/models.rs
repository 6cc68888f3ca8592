#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use crate::models::{Field, FieldValue, Sample};

    #[test]
    fn field_value_round_trips_through_text() {
        let value = FieldValue::from_str("3701.78").unwrap();
        assert_eq!(value, FieldValue::Value(dec!(3701.78)));
        assert_eq!(value.to_string(), "3701.78");

        let missing = FieldValue::from_str("unavailable").unwrap();
        assert_eq!(missing, FieldValue::Unavailable);
        assert_eq!(missing.to_string(), "unavailable");
    }

    #[test]
    fn field_value_rejects_junk() {
        assert!(FieldValue::from_str("n/a").is_err());
        assert!(FieldValue::from_str("").is_err());
    }

    #[test]
    fn field_names_are_snake_case() {
        assert_eq!(Field::LastPrice.to_string(), "last_price");
        assert_eq!(Field::NetChange.to_string(), "net_change");
        assert_eq!(Field::DayHigh.to_string(), "day_high");
    }

    #[test]
    fn sample_accessors_work() {
        let timestamp = NaiveDate::from_ymd_opt(2025, 6, 10)
            .unwrap()
            .and_hms_opt(9, 35, 0)
            .unwrap();
        let sample = Sample::new(
            timestamp,
            FieldValue::Value(dec!(3701.78)),
            FieldValue::Value(dec!(-12.50)),
            FieldValue::Unavailable,
        );

        assert_eq!(sample.date(), NaiveDate::from_ymd_opt(2025, 6, 10).unwrap());
        assert_eq!(sample.timestamp_text(), "2025-06-10 09:35:00");
        assert_eq!(
            sample.value(Field::LastPrice),
            FieldValue::Value(dec!(3701.78))
        );
        assert_eq!(sample.value(Field::DayHigh), FieldValue::Unavailable);
        assert!(sample.value(Field::DayHigh).is_unavailable());
    }
}

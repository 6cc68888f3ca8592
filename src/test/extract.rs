#[cfg(test)]
mod tests {
    use chrono::Timelike;
    use rust_decimal_macros::dec;

    use crate::collector::Extractor;
    use crate::models::{Field, FieldValue};

    const QUOTE_TABLE_PAGE: &str =
        "<td>Last</td><td> 3,701.78 </td><td>Net Change</td><td>-12.50</td>";

    const PLAIN_TEXT_PAGE: &str =
        "Latest Trade: 4,985.01 USD / Change: -33.20 (-0.66%) / Today's Range: 4,950.00 - 5,001.25";

    #[test]
    fn quote_table_extraction_works() {
        let extractor = Extractor::new().unwrap();
        let sample = extractor.extract(QUOTE_TABLE_PAGE);

        assert_eq!(*sample.last_price(), FieldValue::Value(dec!(3701.78)));
        assert_eq!(*sample.net_change(), FieldValue::Value(dec!(-12.50)));
        assert_eq!(*sample.day_high(), FieldValue::Unavailable);
        assert_eq!(sample.timestamp().nanosecond(), 0);
    }

    #[test]
    fn plain_text_fallback_works() {
        let extractor = Extractor::new().unwrap();

        assert_eq!(
            extractor.resolve(Field::LastPrice, PLAIN_TEXT_PAGE),
            FieldValue::Value(dec!(4985.01))
        );
        assert_eq!(
            extractor.resolve(Field::NetChange, PLAIN_TEXT_PAGE),
            FieldValue::Value(dec!(-33.20))
        );
        assert_eq!(
            extractor.resolve(Field::DayHigh, PLAIN_TEXT_PAGE),
            FieldValue::Value(dec!(5001.25))
        );
    }

    #[test]
    fn thousands_separators_are_stripped() {
        let extractor = Extractor::new().unwrap();
        let page = "<td>Last</td><td>12,345.67</td>";

        assert_eq!(
            extractor.resolve(Field::LastPrice, page),
            FieldValue::Value(dec!(12345.67))
        );
    }

    #[test]
    fn unparseable_match_falls_through_to_unavailable() {
        let extractor = Extractor::new().unwrap();
        let page = "<td>Last</td><td> ... </td>";

        assert_eq!(
            extractor.resolve(Field::LastPrice, page),
            FieldValue::Unavailable
        );
    }

    #[test]
    fn fields_resolve_independently() {
        let extractor = Extractor::new().unwrap();
        let page = "<td>Net Change</td><td>+4.20</td>";

        assert_eq!(
            extractor.resolve(Field::LastPrice, page),
            FieldValue::Unavailable
        );
        assert_eq!(
            extractor.resolve(Field::NetChange, page),
            FieldValue::Value(dec!(4.20))
        );
        assert_eq!(
            extractor.resolve(Field::DayHigh, page),
            FieldValue::Unavailable
        );
    }

    #[test]
    fn empty_page_yields_all_unavailable() {
        let extractor = Extractor::new().unwrap();
        let sample = extractor.extract("");

        assert!(sample.last_price().is_unavailable());
        assert!(sample.net_change().is_unavailable());
        assert!(sample.day_high().is_unavailable());
    }
}

use geneadate::datatype::{BareDate, Calendar, CompressedDate, Date, DateValue, Precision};

#[test]
fn compressible_dates_are_packed() {
    let date = Date::gregorian(DateValue::new(15, 6, 2022, Precision::Sure));
    assert_eq!(
        CompressedDate::encode(date),
        CompressedDate::Packed { calendar: Calendar::Gregorian, code: 504_522 }
    );
}

#[test]
fn packed_dates_keep_their_calendar() {
    let stored = CompressedDate::encode(Date::Dmy(DateValue::new(0, 3, 1700, Precision::Maybe), Calendar::Julian));
    match stored.decode() {
        Some(Date::Dmy(d, calendar)) => {
            assert_eq!(calendar, Calendar::Julian);
            assert_eq!((d.day, d.month, d.year), (0, 3, 1700));
            assert_eq!(d.precision, Precision::Maybe);
        }
        other => panic!("unexpected decode result {:?}", other),
    }
}

#[test]
fn nested_precision_stays_decoded() {
    let d = DateValue::new(0, 0, 1850, Precision::YearInt(BareDate::new(0, 0, 1855)));
    let stored = CompressedDate::encode(Date::gregorian(d));
    match &stored {
        CompressedDate::Unpacked(Date::Dmy(kept, Calendar::Gregorian)) => {
            assert_eq!(kept.precision, Precision::YearInt(BareDate::new(0, 0, 1855)));
        }
        other => panic!("unexpected encode result {:?}", other),
    }
    assert_eq!(stored.decode(), Some(Date::gregorian(d)));
}

#[test]
fn delta_stays_decoded() {
    let d = DateValue::new(1, 1, 1800, Precision::Sure).with_delta(2);
    let stored = CompressedDate::encode(Date::Dmy(d, Calendar::French));
    match stored.decode() {
        Some(Date::Dmy(kept, Calendar::French)) => assert_eq!(kept.delta, 2),
        other => panic!("unexpected decode result {:?}", other),
    }
}

#[test]
fn text_dates_encode_to_themselves() {
    let text = Date::Text("during the war".to_string());
    let stored = CompressedDate::encode(text.clone());
    assert_eq!(stored, CompressedDate::Unpacked(text.clone()));
    assert_eq!(stored.decode(), Some(text));
}

#[test]
fn absent_dates() {
    let stored = CompressedDate::from(None::<Date>);
    assert!(stored.is_absent());
    assert_eq!(stored.decode(), None);
    assert_eq!(CompressedDate::default(), CompressedDate::Absent);
    let present = CompressedDate::from(Some(Date::gregorian(DateValue::year(1900))));
    assert!(!present.is_absent());
}

#[test]
fn unpacked_form_serializes() {
    let d = DateValue::new(0, 0, 1850, Precision::OrYear(BareDate::new(0, 0, 1851)));
    let stored = CompressedDate::encode(Date::gregorian(d));
    let json = serde_json::to_string(&stored).unwrap();
    let restored: CompressedDate = serde_json::from_str(&json).unwrap();
    match restored {
        CompressedDate::Unpacked(Date::Dmy(kept, _)) => {
            assert_eq!(kept.precision, Precision::OrYear(BareDate::new(0, 0, 1851)));
            assert_eq!(kept.year, 1850);
        }
        other => panic!("unexpected deserialized value {:?}", other),
    }
}

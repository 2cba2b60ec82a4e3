//! Packing of date values into a single integer.
//!
//! The layout is a mixed-radix number, most significant digit first:
//!
//! ```text
//! code = (((precision * 32 + day) * 13) + month) * 2500 + year
//! ```
//!
//! with the precision digit `Sure=0, About=1, Maybe=2, Before=3, After=4`.
//! The layout is persisted by collaborators and must never change.
//!
//! Only dates with a zero delta, a year in `1..2500` and one of the five
//! plain precisions can be packed. Everything else is stored decoded, see
//! [`CompressedDate::encode`].

use tracing::debug;

use crate::datatype::{CompressedDate, Date, DateValue, Precision};

pub const YEAR_RADIX: i32 = 2500;
pub const MONTH_RADIX: i32 = 13;
pub const DAY_RADIX: i32 = 32;

/// Packs a date value, or returns `None` when it is not compressible.
pub fn compress(d: &DateValue) -> Option<i32> {
    let prec = d.precision.code()?;
    if d.delta != 0
        || !(0..DAY_RADIX).contains(&d.day)
        || !(0..MONTH_RADIX).contains(&d.month)
        || !(1..YEAR_RADIX).contains(&d.year)
    {
        return None;
    }
    Some((((prec * DAY_RADIX + d.day) * MONTH_RADIX) + d.month) * YEAR_RADIX + d.year)
}

/// Unpacks an integer produced by [`compress`].
///
/// Any integer yields a structurally valid value: Euclidean division keeps
/// the fields in range and an unknown leading digit reads as `Sure`.
pub fn uncompress(code: i32) -> DateValue {
    let year = code.rem_euclid(YEAR_RADIX);
    let code = code.div_euclid(YEAR_RADIX);
    let month = code.rem_euclid(MONTH_RADIX);
    let code = code.div_euclid(MONTH_RADIX);
    let day = code.rem_euclid(DAY_RADIX);
    let code = code.div_euclid(DAY_RADIX);
    DateValue {
        day,
        month,
        year,
        precision: Precision::from_code(code),
        delta: 0,
    }
}

impl CompressedDate {
    pub fn encode(date: Date) -> CompressedDate {
        match date {
            Date::Dmy(d, calendar) => match compress(&d) {
                Some(code) => CompressedDate::Packed { calendar, code },
                None => {
                    debug!(date = %d, ?calendar, "date not compressible, keeping it decoded");
                    CompressedDate::Unpacked(Date::Dmy(d, calendar))
                }
            },
            text => CompressedDate::Unpacked(text),
        }
    }
    pub fn decode(&self) -> Option<Date> {
        match self {
            CompressedDate::Packed { calendar, code } => Some(Date::Dmy(uncompress(*code), *calendar)),
            CompressedDate::Unpacked(date) => Some(date.clone()),
            CompressedDate::Absent => None,
        }
    }
}

impl From<Option<Date>> for CompressedDate {
    fn from(date: Option<Date>) -> CompressedDate {
        match date {
            Some(date) => CompressedDate::encode(date),
            None => CompressedDate::Absent,
        }
    }
}

impl From<&CompressedDate> for Option<Date> {
    fn from(cdate: &CompressedDate) -> Option<Date> {
        cdate.decode()
    }
}

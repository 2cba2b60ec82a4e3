// used to convert to and from the chrono date type
use chrono::{Datelike, NaiveDate};
// used so collaborators can keep the decoded form when packing fails
use serde::{Deserialize, Serialize};

// used to print out readable forms of a data type
use std::fmt;
// used to overload comparison operators for date values
use std::cmp::Ordering;

use crate::compare::compare;
use crate::error::{GeneadateError, Result};

// ------------- Calendar -------------
// The calendar a date was recorded in. Only the tag is carried, dates are
// never converted between calendars here.
#[derive(Eq, PartialEq, Hash, Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Calendar {
    #[default]
    Gregorian,
    Julian,
    French,
    Hebrew,
}

impl Calendar {
    // suffix used when printing, nothing for the default calendar
    pub fn suffix(&self) -> &'static str {
        match self {
            Calendar::Gregorian => "",
            Calendar::Julian => "J",
            Calendar::French => "F",
            Calendar::Hebrew => "H",
        }
    }
}

// ------------- BareDate -------------
/// A day/month/year triple without any precision, used as the alternate or
/// bounding date of [`Precision::OrYear`] and [`Precision::YearInt`].
#[derive(Eq, PartialEq, Hash, Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct BareDate {
    pub day: i32,
    pub month: i32,
    pub year: i32,
    pub delta: i32,
}

impl BareDate {
    pub fn new(day: i32, month: i32, year: i32) -> Self {
        Self {
            day,
            month,
            year,
            delta: 0,
        }
    }
}

impl TryFrom<DateValue> for BareDate {
    type Error = GeneadateError;
    // A date value is bare only when it carries the default precision,
    // anything else would be lost when nesting it.
    fn try_from(d: DateValue) -> Result<BareDate> {
        if d.precision != Precision::Sure {
            return Err(GeneadateError::NestedPrecision(format!(
                "inner date {} carries precision {:?}",
                d, d.precision
            )));
        }
        Ok(BareDate {
            day: d.day,
            month: d.month,
            year: d.year,
            delta: d.delta,
        })
    }
}

impl From<BareDate> for DateValue {
    fn from(b: BareDate) -> DateValue {
        DateValue {
            day: b.day,
            month: b.month,
            year: b.year,
            precision: Precision::Sure,
            delta: b.delta,
        }
    }
}

impl fmt::Display for BareDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_dmy(f, self.day, self.month, self.year)
    }
}

// ------------- Precision -------------
/*
Precision expresses how certain a recorded date is, exemplified by:

He was born on 15 June 1850.           Sure
He was born about 1850.                About
He was maybe born in 1850.             Maybe
He was born before 1850.               Before
He was born after 1850.                After
He was born in 1850 or 1851.           OrYear
He was born between 1850 and 1855.     YearInt
*/
#[derive(Eq, PartialEq, Hash, Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub enum Precision {
    #[default]
    Sure,
    About,
    Maybe,
    Before,
    After,
    OrYear(BareDate),
    YearInt(BareDate),
}

impl Precision {
    /// Builds `OrYear` from a full date value, refusing one that carries a
    /// precision of its own.
    pub fn or_year(inner: DateValue) -> Result<Precision> {
        Ok(Precision::OrYear(BareDate::try_from(inner)?))
    }
    /// Builds `YearInt` from a full date value, refusing one that carries a
    /// precision of its own.
    pub fn year_int(inner: DateValue) -> Result<Precision> {
        Ok(Precision::YearInt(BareDate::try_from(inner)?))
    }
    // Sure, About and Maybe do not distinguish dates whose fields match
    pub fn is_exact(&self) -> bool {
        matches!(self, Precision::Sure | Precision::About | Precision::Maybe)
    }
    // the leading digit of a packed date, the nested variants have none
    pub fn code(&self) -> Option<i32> {
        match self {
            Precision::Sure => Some(0),
            Precision::About => Some(1),
            Precision::Maybe => Some(2),
            Precision::Before => Some(3),
            Precision::After => Some(4),
            Precision::OrYear(_) | Precision::YearInt(_) => None,
        }
    }
    pub fn from_code(code: i32) -> Precision {
        match code {
            1 => Precision::About,
            2 => Precision::Maybe,
            3 => Precision::Before,
            4 => Precision::After,
            _ => Precision::Sure,
        }
    }
    pub fn same_variant(&self, other: &Precision) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

// ------------- DateValue -------------
/// A possibly partial date with its precision.
///
/// A zero `day` or `month` means that component is unknown, the year is
/// always known. `delta` is an offset used by calendar conversions; a value
/// with a non-zero delta cannot be packed.
///
/// Equality and ordering go through [`compare`] in non-strict mode, so two
/// values are equal when nothing distinguishes them, e.g. `~1850` and `1850`.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct DateValue {
    pub day: i32,
    pub month: i32,
    pub year: i32,
    pub precision: Precision,
    pub delta: i32,
}

impl DateValue {
    pub fn new(day: i32, month: i32, year: i32, precision: Precision) -> Self {
        Self {
            day,
            month,
            year,
            precision,
            delta: 0,
        }
    }
    pub fn year(year: i32) -> Self {
        Self::new(0, 0, year, Precision::Sure)
    }
    pub fn with_precision(self, precision: Precision) -> Self {
        Self { precision, ..self }
    }
    pub fn with_delta(self, delta: i32) -> Self {
        Self { delta, ..self }
    }
    // the literal fields without precision
    pub fn bare(&self) -> BareDate {
        BareDate {
            day: self.day,
            month: self.month,
            year: self.year,
            delta: self.delta,
        }
    }
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        if self.day <= 0 || self.month <= 0 {
            return None;
        }
        NaiveDate::from_ymd_opt(self.year, self.month as u32, self.day as u32)
    }
}

impl From<NaiveDate> for DateValue {
    fn from(d: NaiveDate) -> DateValue {
        DateValue::new(d.day() as i32, d.month() as i32, d.year(), Precision::Sure)
    }
}

impl PartialEq for DateValue {
    fn eq(&self, other: &Self) -> bool {
        compare(self, other, false) == Some(Ordering::Equal)
    }
}
impl PartialOrd for DateValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        compare(self, other, false)
    }
}

fn write_dmy(f: &mut fmt::Formatter, day: i32, month: i32, year: i32) -> fmt::Result {
    match (day, month) {
        (0, 0) => write!(f, "{}", year),
        (0, m) => write!(f, "{}/{}", m, year),
        (d, m) => write!(f, "{}/{}/{}", d, m, year),
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.precision {
            Precision::About => write!(f, "~")?,
            Precision::Maybe => write!(f, "?")?,
            Precision::Before => write!(f, "<")?,
            Precision::After => write!(f, ">")?,
            _ => {}
        }
        write_dmy(f, self.day, self.month, self.year)?;
        match self.precision {
            Precision::OrYear(alt) => write!(f, "|{}", alt),
            Precision::YearInt(alt) => write!(f, "..{}", alt),
            _ => Ok(()),
        }
    }
}

// ------------- Date -------------
// The decoded form of a recorded date: either structured or free text.
#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
pub enum Date {
    Dmy(DateValue, Calendar),
    Text(String),
}

impl Date {
    pub fn gregorian(d: DateValue) -> Self {
        Date::Dmy(d, Calendar::Gregorian)
    }
    pub fn value(&self) -> Option<&DateValue> {
        match self {
            Date::Dmy(d, _) => Some(d),
            Date::Text(_) => None,
        }
    }
    pub fn calendar(&self) -> Option<Calendar> {
        match self {
            Date::Dmy(_, c) => Some(*c),
            Date::Text(_) => None,
        }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Date::Dmy(d, c) => write!(f, "{}{}", d, c.suffix()),
            Date::Text(t) => write!(f, "0({})", t),
        }
    }
}

// ------------- CompressedDate -------------
/// The storage form of a recorded date. Structured dates that fit the
/// packing are kept as a calendar tag plus an integer, everything else is
/// kept decoded. See [`crate::codec`] for the conversions.
#[derive(PartialEq, Clone, Debug, Default, Serialize, Deserialize)]
pub enum CompressedDate {
    Packed { calendar: Calendar, code: i32 },
    Unpacked(Date),
    #[default]
    Absent,
}

impl CompressedDate {
    pub fn is_absent(&self) -> bool {
        matches!(self, CompressedDate::Absent)
    }
}

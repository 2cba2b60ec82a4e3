//! Elapsed time between two uncertain dates.

use crate::datatype::{DateValue, Precision};

const DAYS_IN_MONTH: [i32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

// proleptic Gregorian rule
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` of `year`, zero for a month outside `1..=12`.
pub fn days_in_month(month: i32, year: i32) -> i32 {
    match month {
        2 if is_leap_year(year) => 29,
        1..=12 => DAYS_IN_MONTH[(month - 1) as usize],
        _ => 0,
    }
}

/// The precision of a value derived from two dates: the fuzziest input wins,
/// `Before` over `After` over any other uncertainty (reported as `Maybe`)
/// over `Sure`.
pub fn combine_precision(p1: &Precision, p2: &Precision) -> Precision {
    match (p1, p2) {
        (Precision::Before, _) | (_, Precision::Before) => Precision::Before,
        (Precision::After, _) | (_, Precision::After) => Precision::After,
        (Precision::Sure, Precision::Sure) => Precision::Sure,
        _ => Precision::Maybe,
    }
}

/// Elapsed years, months and days from `d1` to `d2`.
///
/// Returns `None` when both dates are lower bounds or both are upper bounds,
/// since nothing can be said about the distance between them. The day and
/// month granularity follows `d1`: an unknown day on `d1` yields a result
/// without days, an unknown month (with or without a day) one in whole
/// years. Also `None` when a field would overflow.
pub fn date_difference(d1: &DateValue, d2: &DateValue) -> Option<DateValue> {
    match (&d1.precision, &d2.precision) {
        (Precision::Before, Precision::Before) | (Precision::After, Precision::After) => return None,
        _ => {}
    }
    let precision = combine_precision(&d1.precision, &d2.precision);
    let years = d2.year.checked_sub(d1.year)?;
    let (day, month, year) = if d1.month == 0 {
        // a day without its month says nothing about the days elapsed
        (0, 0, years)
    } else if d1.day == 0 {
        let (month, carry) = borrow(d2.month.checked_sub(d1.month)?, 12);
        (0, month, years.checked_sub(carry)?)
    } else {
        let (day, carry) = borrow(d2.day.checked_sub(d1.day)?, days_in_month(d1.month, d1.year));
        let (month, carry) = borrow(d2.month.checked_sub(d1.month)?.checked_sub(carry)?, 12);
        (day, month, years.checked_sub(carry)?)
    };
    Some(DateValue::new(day, month, year, precision))
}

// Adds one unit of `radix` to a negative digit and reports the borrow.
// A negative diff plus a small radix cannot overflow.
fn borrow(diff: i32, radix: i32) -> (i32, i32) {
    if diff < 0 { (diff + radix, 1) } else { (diff, 0) }
}

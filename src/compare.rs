//! Ordering of uncertain dates.
//!
//! [`compare`] returns `Some(ordering)` or, in strict mode only, `None` when
//! the precisions involved do not guarantee any ordering. A date known only
//! as "after 2022" is not guaranteed to precede "after 2023", so strict mode
//! refuses to answer while the default mode orders them by their literal
//! fields.
//!
//! The procedure compares years, then months, then days. A zero month or day
//! is unknown: a bounded date (`Before`/`After`) on the unknown side decides
//! the outcome, anything else falls through to the precisions. When every
//! literal field agrees the precisions break the tie.

use std::cmp::Ordering;

use tracing::trace;

use crate::datatype::{Date, DateValue, Precision};
use crate::error::{GeneadateError, Result};

pub fn compare(d1: &DateValue, d2: &DateValue, strict: bool) -> Option<Ordering> {
    let result = if d1.year == d2.year {
        compare_month(strict, d1, d2)
    } else {
        filter(strict, d1, d2, d1.year.cmp(&d2.year))
    };
    if result.is_none() {
        trace!(%d1, %d2, "dates are incomparable");
    }
    result
}

/// Compares two decoded dates by their values. Calendars are not converted,
/// so only dates recorded in the same calendar give a meaningful answer.
pub fn compare_dates(d1: &Date, d2: &Date, strict: bool) -> Result<Option<Ordering>> {
    match (d1, d2) {
        (Date::Dmy(v1, _), Date::Dmy(v2, _)) => Ok(compare(v1, v2, strict)),
        (Date::Text(t), _) | (_, Date::Text(t)) => Err(GeneadateError::NotComparable(format!(
            "text date '{}' has no ordering",
            t
        ))),
    }
}

// Drops an ordering that the bounds of d1 and d2 do not guarantee.
fn filter(strict: bool, d1: &DateValue, d2: &DateValue, ordering: Ordering) -> Option<Ordering> {
    if !strict {
        return Some(ordering);
    }
    match ordering {
        Ordering::Less
            if d1.precision == Precision::After || d2.precision == Precision::Before =>
        {
            None
        }
        Ordering::Greater
            if d1.precision == Precision::Before || d2.precision == Precision::After =>
        {
            None
        }
        _ => Some(ordering),
    }
}

fn compare_month(strict: bool, d1: &DateValue, d2: &DateValue) -> Option<Ordering> {
    compare_level(strict, d1, d2, d1.month, d2.month, compare_day)
}

fn compare_day(strict: bool, d1: &DateValue, d2: &DateValue) -> Option<Ordering> {
    compare_level(strict, d1, d2, d1.day, d2.day, compare_precision)
}

// One level of the month/day procedure, x belongs to d1 and y to d2.
fn compare_level(
    strict: bool,
    d1: &DateValue,
    d2: &DateValue,
    x: i32,
    y: i32,
    next: fn(bool, &DateValue, &DateValue) -> Option<Ordering>,
) -> Option<Ordering> {
    match (x, y) {
        (0, 0) => compare_precision(strict, d1, d2),
        (0, _) => match d1.precision {
            Precision::After => Some(Ordering::Greater),
            Precision::Before => Some(Ordering::Less),
            _ if strict => None,
            _ => compare_precision(strict, d1, d2),
        },
        (_, 0) => match d2.precision {
            Precision::After => Some(Ordering::Less),
            Precision::Before => Some(Ordering::Greater),
            _ if strict => None,
            _ => compare_precision(strict, d2, d1).map(Ordering::reverse),
        },
        _ if x == y => next(strict, d1, d2),
        _ => filter(strict, d1, d2, x.cmp(&y)),
    }
}

// Terminal case, the literal fields agree or are unknown on both sides.
fn compare_precision(strict: bool, d1: &DateValue, d2: &DateValue) -> Option<Ordering> {
    let (p1, p2) = (&d1.precision, &d2.precision);
    if p1.is_exact() && p2.is_exact() {
        return Some(Ordering::Equal);
    }
    if p1.same_variant(p2) {
        match p1 {
            Precision::Before | Precision::After => return Some(Ordering::Equal),
            Precision::OrYear(_) | Precision::YearInt(_) => {
                return compare(
                    &d1.with_precision(Precision::Sure),
                    &d2.with_precision(Precision::Sure),
                    strict,
                );
            }
            _ => {}
        }
    }
    if *p1 == Precision::Before || *p2 == Precision::After {
        Some(Ordering::Less)
    } else if *p1 == Precision::After || *p2 == Precision::Before {
        Some(Ordering::Greater)
    } else {
        Some(Ordering::Equal)
    }
}

//! Ordering and measuring recorded dates the way a genealogy renders them.

use std::cmp::Ordering;

use crate::compare::compare;
use crate::config::Settings;
use crate::datatype::{Calendar, Date, DateValue};
use crate::difference::date_difference;
use crate::error::{GeneadateError, Result};

#[derive(Debug, Clone, Copy, Default)]
pub struct Chronology {
    strict: bool,
    calendar: Calendar,
}

impl Chronology {
    pub fn new(strict: bool, calendar: Calendar) -> Self {
        Self { strict, calendar }
    }
    pub fn strict(&self) -> bool {
        self.strict
    }
    pub fn date(&self, d: DateValue) -> Date {
        Date::Dmy(d, self.calendar)
    }

    /// Stable sort of recorded dates. Text dates go last in their original
    /// order. Whenever one date compares strictly less than another it ends
    /// up ahead of it, otherwise the original order is kept.
    ///
    /// The comparison is not transitive (an unknown month equals every
    /// month), so this repeatedly takes the first remaining date that no
    /// remaining date is strictly less than, instead of `slice::sort_by`.
    pub fn sort(&self, dates: &mut [Date]) {
        let n = dates.len();
        // number of remaining dates strictly less than each date
        let mut pending: Vec<usize> = (0..n)
            .map(|i| (0..n).filter(|&j| self.precedes(&dates[j], &dates[i])).count())
            .collect();
        let mut placed = vec![false; n];
        let mut order = Vec::with_capacity(n);
        while order.len() < n {
            // a cycle of strictly-less pairs leaves no free date, break it in order
            let next = (0..n)
                .find(|&i| !placed[i] && pending[i] == 0)
                .or_else(|| (0..n).find(|&i| !placed[i]));
            let Some(next) = next else { break };
            placed[next] = true;
            order.push(next);
            for i in (0..n).filter(|&i| !placed[i]) {
                if pending[i] > 0 && self.precedes(&dates[next], &dates[i]) {
                    pending[i] -= 1;
                }
            }
        }
        let sorted: Vec<Date> = order.iter().map(|&i| dates[i].clone()).collect();
        dates.clone_from_slice(&sorted);
    }

    fn precedes(&self, a: &Date, b: &Date) -> bool {
        match (a.value(), b.value()) {
            (Some(a), Some(b)) => compare(a, b, self.strict) == Some(Ordering::Less),
            (Some(_), None) => true,
            (None, _) => false,
        }
    }

    /// Time elapsed from `from` to `to`, `Ok(None)` when the precisions make
    /// it undefined.
    pub fn elapsed(&self, from: &Date, to: &Date) -> Result<Option<DateValue>> {
        match (from, to) {
            (Date::Dmy(d1, _), Date::Dmy(d2, _)) => Ok(date_difference(d1, d2)),
            (Date::Text(t), _) | (_, Date::Text(t)) => Err(GeneadateError::NotComparable(format!(
                "no elapsed time to or from text date '{}'",
                t
            ))),
        }
    }
}

impl From<&Settings> for Chronology {
    fn from(settings: &Settings) -> Self {
        Self::new(settings.strict, settings.calendar)
    }
}

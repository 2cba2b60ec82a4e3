//! Geneadate – uncertain genealogical dates.
//!
//! Genealogical records rarely carry exact dates. A birth may be known to
//! the day, only approximately (`about 1850`), only as a bound (`before
//! 1850`, `after 1850`), as one of two years (`1850 or 1851`) or within an
//! interval (`between 1850 and 1855`). This crate models such dates and the
//! operations collaborators need to store, order and measure them:
//! * A [`datatype::DateValue`] is a day/month/year triple where `0` marks an
//!   unknown day or month, together with a [`datatype::Precision`].
//! * A [`datatype::Date`] is a decoded recorded date: a value tagged with its
//!   [`datatype::Calendar`], or free text.
//! * A [`datatype::CompressedDate`] is the storage form: a calendar tag plus a
//!   packed integer whenever the value fits, the decoded date otherwise.
//!
//! ## Modules
//! * [`datatype`] – The date types and their textual rendering.
//! * [`codec`] – Packing of date values into a single integer and the
//!   encode/decode conversions of [`datatype::CompressedDate`].
//! * [`compare`] – Three-valued comparison with a strict mode that may
//!   declare two dates incomparable.
//! * [`difference`] – Elapsed time between two dates and the combination of
//!   their precisions.
//! * [`chronology`] – Sorting and measuring decoded dates.
//! * [`config`] – Layered settings and the tracing bootstrap.
//!
//! ## Quick Start
//! ```
//! use geneadate::datatype::{CompressedDate, Date, DateValue, Precision};
//! use geneadate::compare::compare;
//! use std::cmp::Ordering;
//!
//! let born = DateValue::new(15, 6, 1850, Precision::About);
//! let stored = CompressedDate::encode(Date::gregorian(born));
//! assert!(matches!(stored, CompressedDate::Packed { .. }));
//! let restored = stored.decode().unwrap();
//! let died = DateValue::new(0, 0, 1900, Precision::Before);
//! assert_eq!(compare(restored.value().unwrap(), &died, false), Some(Ordering::Less));
//! ```
//!
//! Calendar conversion is not performed here: the calendar is carried as a
//! tag and comparisons use the literal fields.

pub mod chronology;
pub mod codec;
pub mod compare;
pub mod config;
pub mod datatype;
pub mod difference;
pub mod error;

pub use chronology::Chronology;
pub use codec::{compress, uncompress};
pub use compare::{compare, compare_dates};
pub use self::config::Settings;
pub use datatype::{BareDate, Calendar, CompressedDate, Date, DateValue, Precision};
pub use difference::{combine_precision, date_difference};
pub use error::{GeneadateError, Result};

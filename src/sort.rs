//! Ways to order records
//!
//! Each ordering is a plain comparison function, handed to [`sort_records`].
//! Ties are left in no particular order.
//! ```
//! use rostersort::prelude::*;
//! use rostersort::sort::{by_age, sort_records};
//! let mut v = vec![Record::new("Bob", 25, 85), Record::new("Al", 9, 1)];
//! sort_records(&mut v, by_age);
//! assert_eq!(v[0].name(), "Al");
//! ```

use crate::prelude::*;

/// a way to compare two records
pub type Comparator = fn(&Record, &Record) -> Ordering;

/// compare names, byte by byte. No case folding, no locale.
pub fn by_name(left: &Record, right: &Record) -> Ordering {
    left.name().as_bytes().cmp(right.name().as_bytes())
}

/// compare ages, numerically
pub fn by_age(left: &Record, right: &Record) -> Ordering {
    left.age().cmp(&right.age())
}

/// sort records in place
pub fn sort_records<F>(people: &mut [Record], cmp: F)
where
    F: FnMut(&Record, &Record) -> Ordering,
{
    people.sort_unstable_by(cmp);
}

/// are the records in order?
pub fn is_sorted<F>(people: &[Record], mut cmp: F) -> bool
where
    F: FnMut(&Record, &Record) -> Ordering,
{
    people.windows(2).all(|w| cmp(&w[0], &w[1]) != Ordering::Greater)
}

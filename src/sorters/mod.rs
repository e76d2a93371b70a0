//! Room sorters: total orders over a room collection for a named view.
//!
//! A [`Sorter`] is a comparator object keyed by a [`SortingAlgorithm`].
//! `sort` always copies and stable-sorts; the caller's sequence is never
//! reordered in place (callers keep the original order around for diffing).

mod alphabetic;
mod collate;
mod recency;

pub use alphabetic::AlphabeticSorter;
pub use recency::RecencySorter;

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::Error;
use crate::notifications::NotificationProvider;
use crate::room::Room;

/// Identity of a sorting algorithm. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(try_from = "String")]
pub enum SortingAlgorithm {
    /// Most recent activity first, muted/low-priority rooms pushed down.
    Recency,
    /// Locale-insensitive name order.
    Alphabetic,
}

impl SortingAlgorithm {
    /// Every known algorithm.
    pub const ALL: [SortingAlgorithm; 2] = [SortingAlgorithm::Recency, SortingAlgorithm::Alphabetic];

    /// Stable string form, used in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortingAlgorithm::Recency => "recency",
            SortingAlgorithm::Alphabetic => "alphabetic",
        }
    }
}

impl fmt::Display for SortingAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortingAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recency" => Ok(SortingAlgorithm::Recency),
            "alphabetic" => Ok(SortingAlgorithm::Alphabetic),
            other => Err(Error::UnknownSortingAlgorithm(other.to_string())),
        }
    }
}

impl TryFrom<String> for SortingAlgorithm {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// A comparator producing a total order over rooms.
///
/// `compare` must be a strict weak ordering and must never fail for
/// well-formed rooms; repeated calls on unchanged input agree.
pub trait Sorter {
    /// The algorithm this sorter implements.
    fn algorithm(&self) -> SortingAlgorithm;

    /// Order `a` relative to `b`.
    fn compare(&self, a: &dyn Room, b: &dyn Room) -> Ordering;

    /// Return a new, ordered sequence. The input is left untouched.
    ///
    /// The sort is stable: rooms that compare equal keep their incoming
    /// relative order.
    fn sort(&self, rooms: &[Rc<dyn Room>]) -> Vec<Rc<dyn Room>> {
        let mut sorted = rooms.to_vec();
        sorted.sort_by(|a, b| self.compare(a.as_ref(), b.as_ref()));
        sorted
    }
}

/// Construct the sorter behind `algorithm`.
///
/// The notification provider feeds the recency sorter's muted lookup; the
/// alphabetic sorter ignores it.
pub fn sorter_for(
    algorithm: SortingAlgorithm,
    notifications: Arc<dyn NotificationProvider>,
) -> Box<dyn Sorter> {
    match algorithm {
        SortingAlgorithm::Recency => Box::new(RecencySorter::new(notifications)),
        SortingAlgorithm::Alphabetic => Box::new(AlphabeticSorter::new()),
    }
}

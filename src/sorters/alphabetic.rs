//! Name-order sorter.

use std::cmp::Ordering;
use std::rc::Rc;

use super::collate::sort_key;
use super::{Sorter, SortingAlgorithm};
use crate::room::Room;

/// Orders rooms by display name, case- and diacritic-insensitively.
///
/// Rooms without a computed name sort after named ones. Equal keys keep
/// their incoming relative order (stable sort).
#[derive(Debug, Default)]
pub struct AlphabeticSorter;

impl AlphabeticSorter {
    /// Create the sorter.
    pub fn new() -> Self {
        Self
    }
}

fn compare_keys(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl Sorter for AlphabeticSorter {
    fn algorithm(&self) -> SortingAlgorithm {
        SortingAlgorithm::Alphabetic
    }

    fn compare(&self, a: &dyn Room, b: &dyn Room) -> Ordering {
        let key_a = a.name().map(sort_key);
        let key_b = b.name().map(sort_key);
        compare_keys(key_a.as_deref(), key_b.as_deref())
    }

    // Collation keys are not free; compute each once instead of per
    // comparison.
    fn sort(&self, rooms: &[Rc<dyn Room>]) -> Vec<Rc<dyn Room>> {
        let mut keyed: Vec<(Option<String>, Rc<dyn Room>)> = rooms
            .iter()
            .map(|room| (room.name().map(sort_key), Rc::clone(room)))
            .collect();

        keyed.sort_by(|(a, _), (b, _)| compare_keys(a.as_deref(), b.as_deref()));
        keyed.into_iter().map(|(_, room)| room).collect()
    }
}

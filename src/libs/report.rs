//! Aggregation of SGU rows into the final report.
//!
//! Rows sharing the same (project, date, activity) key merge into one, with
//! their hours summed. The merged row keeps the card key, category and user
//! of the first row seen for that key, and groups come out in the order
//! their keys first appear.

use crate::libs::sgu::SguEntry;
use std::collections::hash_map::{Entry, HashMap};

/// Grouping key of the report: rows with the same project, date and
/// activity collapse into one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryKey {
    pub project: String,
    pub date: String,
    pub activity: String,
}

impl From<&SguEntry> for EntryKey {
    fn from(entry: &SguEntry) -> Self {
        Self {
            project: entry.project.clone(),
            date: entry.date.clone(),
            activity: entry.activity.clone(),
        }
    }
}

/// Collapses rows sharing an [`EntryKey`] by summing their hours.
///
/// The first row seen for a key is kept as-is; later rows only contribute
/// their hours, so their category and card key are dropped. Rows come out in
/// first-seen key order.
pub fn group_entries(entries: Vec<SguEntry>) -> Vec<SguEntry> {
    let mut index: HashMap<EntryKey, usize> = HashMap::new();
    let mut grouped: Vec<SguEntry> = Vec::new();

    for entry in entries {
        match index.entry(EntryKey::from(&entry)) {
            Entry::Occupied(slot) => grouped[*slot.get()].hours += entry.hours,
            Entry::Vacant(slot) => {
                slot.insert(grouped.len());
                grouped.push(entry);
            }
        }
    }

    grouped
}

//! The shared, read-only event table.

use std::{path::Path, slice, sync::Arc};

use crate::{Event, TableError, load::load_events};

/// An immutable, cheaply cloneable collection of events.
///
/// A table is built once and shared by every query; queries borrow rows and never
/// mutate them. Reloading means building a new table.
#[derive(Debug, Clone, Default)]
pub struct EventTable {
    /// The rows, in source order.
    events: Arc<[Event]>,
}

impl EventTable {
    /// Creates a table from already-materialized events.
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: events.into(),
        }
    }

    /// Loads a table from a CSV file.
    pub fn load(path: &Path) -> Result<Self, TableError> {
        load_events(path).map(Self::new)
    }

    /// Returns the rows as a slice.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Iterates over the rows in source order.
    pub fn iter(&self) -> slice::Iter<'_, Event> {
        self.events.iter()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl FromIterator<Event> for EventTable {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a EventTable {
    type Item = &'a Event;
    type IntoIter = slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::ptr;

    use super::*;

    #[test]
    fn default_table_is_empty() {
        let table = EventTable::default();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert_eq!(table.iter().count(), 0);
    }

    #[test]
    fn clones_share_rows() {
        let table: EventTable = vec![Event::new("Concerts", "Paris", "a", "b")]
            .into_iter()
            .collect();
        let copy = table.clone();
        assert!(ptr::eq(table.events(), copy.events()));
        assert_eq!(copy.len(), 1);
    }
}

//! Per-member selection sets for votes, likes, and joins.
//!
//! A [`Selection`] records which records a member has voted for, liked, or
//! joined. Toggling an id flips its membership and, for counted toggles,
//! moves the record's counter by one in the same direction. Counters are not
//! clamped, so a selection that disagrees with the counter can push it below
//! zero.

use std::collections::BTreeSet;

/// Result of toggling an id in a [`Selection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The id was absent and is now selected.
    Added,
    /// The id was selected and has been removed.
    Removed,
}

impl ToggleOutcome {
    /// Counter adjustment matching the outcome.
    #[must_use]
    pub const fn delta(self) -> i64 {
        match self {
            Self::Added => 1,
            Self::Removed => -1,
        }
    }
}

/// Set of record ids chosen by one member.
///
/// # Examples
/// ```
/// use engage_local::domain::{ProjectId, Selection, ToggleOutcome};
///
/// let id = ProjectId::new("1").expect("valid id");
/// let mut votes = Selection::default();
/// let mut counter = 45;
///
/// assert_eq!(votes.toggle_counted(&id, &mut counter), ToggleOutcome::Added);
/// assert_eq!(counter, 46);
/// assert_eq!(votes.toggle_counted(&id, &mut counter), ToggleOutcome::Removed);
/// assert_eq!(counter, 45);
/// assert!(!votes.contains(&id));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<Id: Ord> {
    ids: BTreeSet<Id>,
}

impl<Id: Ord> Default for Selection<Id> {
    fn default() -> Self {
        Self {
            ids: BTreeSet::new(),
        }
    }
}

impl<Id: Ord + Clone> Selection<Id> {
    /// Flip membership of `id`.
    pub fn toggle(&mut self, id: &Id) -> ToggleOutcome {
        if self.ids.remove(id) {
            ToggleOutcome::Removed
        } else {
            self.ids.insert(id.clone());
            ToggleOutcome::Added
        }
    }

    /// Flip membership of `id` and move `counter` by one to match.
    pub fn toggle_counted(&mut self, id: &Id, counter: &mut i64) -> ToggleOutcome {
        let outcome = self.toggle(id);
        *counter += outcome.delta();
        outcome
    }

    /// Whether `id` is selected.
    #[must_use]
    pub fn contains(&self, id: &Id) -> bool {
        self.ids.contains(id)
    }

    /// Number of selected ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &Id> {
        self.ids.iter()
    }
}

impl<Id: Ord> FromIterator<Id> for Selection<Id> {
    fn from_iter<I: IntoIterator<Item = Id>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

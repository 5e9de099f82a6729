//! # Storage Layer
//!
//! [`ActionStore`] abstracts persistence of the action collection so the
//! command layer can run against the filesystem or memory. The collection is
//! the unit of persistence: `load` returns the whole thing, `save` rewrites
//! the whole thing. There is no finer granularity, no locking, and no state
//! between calls; every caller performs its own read-modify-write cycle, so
//! concurrent writers can race.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one JSON file on disk, the production backend.
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O.

use crate::error::Result;
use crate::model::Action;

pub mod fs;
pub mod memory;

/// Abstract interface for action storage.
pub trait ActionStore {
    /// Load the full ordered collection. Missing or unreadable data degrades
    /// to an empty collection; load never surfaces corruption as an error.
    fn load(&self) -> Result<Vec<Action>>;

    /// Overwrite the persisted collection. Fails only on unrecoverable I/O
    /// errors, which propagate to the caller.
    fn save(&self, actions: &[Action]) -> Result<()>;
}

/// Next identifier to assign: 1 for an empty collection, `max + 1` otherwise.
///
/// Because the max is recomputed from whatever remains, deleting the
/// highest-id record frees that id for the next create. Ids are dense, not
/// monotonic.
pub fn next_id(actions: &[Action]) -> u64 {
    actions.iter().map(|a| a.id).max().map_or(1, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn action(id: u64) -> Action {
        Action {
            id,
            action: "Recycled".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            points: 10,
        }
    }

    #[test]
    fn next_id_starts_at_one() {
        assert_eq!(next_id(&[]), 1);
    }

    #[test]
    fn next_id_is_max_plus_one() {
        assert_eq!(next_id(&[action(3), action(7)]), 8);
    }

    #[test]
    fn next_id_ignores_gaps_below_the_max() {
        // {1, 9} -> 10, not 2. Holes are never backfilled.
        assert_eq!(next_id(&[action(1), action(9)]), 10);
    }
}

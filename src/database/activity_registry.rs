use std::sync::Arc;

use parking_lot::RwLock;

use crate::database::seed;
use crate::models::{Activity, ActivityMap};

/// Result of a guarded participant insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    ActivityMissing,
    AlreadyPresent,
}

/// Shared handle to the in-process activity registry.
///
/// Cloning is cheap and every clone sees the same data. The router holds one
/// as state; tests build their own so nothing leaks between them.
#[derive(Clone, Default)]
pub struct ActivityRegistry {
    inner: Arc<RwLock<ActivityMap>>,
}

impl ActivityRegistry {
    pub fn new(activities: ActivityMap) -> Self {
        Self {
            inner: Arc::new(RwLock::new(activities)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::seed_activities())
    }

    pub fn snapshot(&self) -> ActivityMap {
        self.inner.read().clone()
    }

    pub fn get(&self, name: &str) -> Option<Activity> {
        self.inner.read().get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Appends `email` to the named activity's roster.
    ///
    /// Lookup, duplicate check and append all happen under one write lock,
    /// so two racing inserts of the same email cannot both succeed.
    pub fn insert_participant(&self, name: &str, email: &str) -> InsertOutcome {
        let mut activities = self.inner.write();
        let Some(activity) = activities.get_mut(name) else {
            return InsertOutcome::ActivityMissing;
        };
        if activity.has_participant(email) {
            return InsertOutcome::AlreadyPresent;
        }
        activity.participants.push(email.to_string());
        InsertOutcome::Inserted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_appends_after_existing_participants() {
        let registry = ActivityRegistry::seeded();
        assert_eq!(
            registry.insert_participant("Drama Club", "zoe@mergington.edu"),
            InsertOutcome::Inserted
        );
        let drama = registry.get("Drama Club").unwrap();
        assert_eq!(
            drama.participants,
            vec![
                "noah@mergington.edu",
                "ava@mergington.edu",
                "zoe@mergington.edu"
            ]
        );
    }

    #[test]
    fn insert_reports_missing_and_duplicate() {
        let registry = ActivityRegistry::seeded();
        assert_eq!(
            registry.insert_participant("Basket Weaving", "a@mergington.edu"),
            InsertOutcome::ActivityMissing
        );
        assert_eq!(
            registry.insert_participant("Basketball", "alex@mergington.edu"),
            InsertOutcome::AlreadyPresent
        );
        assert_eq!(registry.get("Basketball").unwrap().participants.len(), 1);
    }

    #[test]
    fn names_are_case_sensitive() {
        let registry = ActivityRegistry::seeded();
        assert_eq!(
            registry.insert_participant("basketball", "a@mergington.edu"),
            InsertOutcome::ActivityMissing
        );
    }

    #[test]
    fn clones_share_state() {
        let registry = ActivityRegistry::seeded();
        let other = registry.clone();
        other.insert_participant("Chess Club", "kim@mergington.edu");
        assert!(registry
            .get("Chess Club")
            .unwrap()
            .has_participant("kim@mergington.edu"));
    }

    #[test]
    fn separate_registries_are_isolated() {
        let a = ActivityRegistry::seeded();
        let b = ActivityRegistry::seeded();
        a.insert_participant("Chess Club", "kim@mergington.edu");
        assert_eq!(b.get("Chess Club").unwrap().participants.len(), 2);
        assert_eq!(b.len(), 7);
    }

    #[test]
    fn concurrent_duplicate_inserts_admit_one() {
        let registry = ActivityRegistry::seeded();
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let registry = registry.clone();
                std::thread::spawn(move || {
                    registry.insert_participant("Gym Class", "race@mergington.edu")
                })
            })
            .collect();

        let inserted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|o| *o == InsertOutcome::Inserted)
            .count();
        assert_eq!(inserted, 1);

        let gym = registry.get("Gym Class").unwrap();
        assert_eq!(gym.participants.len(), 3);
    }
}

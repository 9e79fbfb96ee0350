use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::database::activity_registry::{ActivityRegistry, InsertOutcome};
use crate::models::ActivityMap;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignupError {
    #[error("Activity not found")]
    NotFound,
    #[error("Student is already signed up")]
    AlreadySignedUp,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SignupConfirmation {
    pub message: String,
}

pub fn list_activities(registry: &ActivityRegistry) -> ActivityMap {
    registry.snapshot()
}

/// Enrolls `email` in `activity_name`.
///
/// The activity must exist and must not already list the email. The
/// advertised capacity is not checked.
pub fn signup(
    registry: &ActivityRegistry,
    activity_name: &str,
    email: &str,
) -> Result<SignupConfirmation, SignupError> {
    match registry.insert_participant(activity_name, email) {
        InsertOutcome::Inserted => {
            info!(activity = %activity_name, email = %email, "participant signed up");
            Ok(SignupConfirmation {
                message: format!("Signed up {} for {}", email, activity_name),
            })
        }
        InsertOutcome::ActivityMissing => {
            debug!(activity = %activity_name, "signup for unknown activity");
            Err(SignupError::NotFound)
        }
        InsertOutcome::AlreadyPresent => {
            debug!(activity = %activity_name, email = %email, "duplicate signup");
            Err(SignupError::AlreadySignedUp)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Activity;

    #[test]
    fn signup_message_names_email_and_activity() {
        let registry = ActivityRegistry::seeded();
        let ok = signup(&registry, "Basketball", "newstudent@mergington.edu").unwrap();
        assert_eq!(
            ok.message,
            "Signed up newstudent@mergington.edu for Basketball"
        );
    }

    #[test]
    fn second_signup_is_rejected() {
        let registry = ActivityRegistry::seeded();
        signup(&registry, "Basketball", "dup@mergington.edu").unwrap();
        let err = signup(&registry, "Basketball", "dup@mergington.edu").unwrap_err();
        assert_eq!(err, SignupError::AlreadySignedUp);
        assert!(err.to_string().contains("already signed up"));

        let roster = &list_activities(&registry)["Basketball"].participants;
        assert_eq!(roster.iter().filter(|p| *p == "dup@mergington.edu").count(), 1);
    }

    #[test]
    fn unknown_activity_leaves_registry_untouched() {
        let registry = ActivityRegistry::seeded();
        let before = list_activities(&registry);
        let err = signup(&registry, "NonExistent", "student@mergington.edu").unwrap_err();
        assert_eq!(err.to_string(), "Activity not found");
        assert_eq!(list_activities(&registry), before);
    }

    #[test]
    fn capacity_is_not_enforced() {
        let mut activities = ActivityMap::new();
        activities.insert(
            "Tiny Club".to_string(),
            Activity::new("One seat", "Never", 1, &["first@mergington.edu"]),
        );
        let registry = ActivityRegistry::new(activities);

        signup(&registry, "Tiny Club", "second@mergington.edu").unwrap();
        signup(&registry, "Tiny Club", "third@mergington.edu").unwrap();

        let tiny = registry.get("Tiny Club").unwrap();
        assert_eq!(tiny.max_participants, 1);
        assert_eq!(tiny.participants.len(), 3);
    }

    #[test]
    fn same_email_may_join_several_activities() {
        let registry = ActivityRegistry::seeded();
        signup(&registry, "Basketball", "multi@mergington.edu").unwrap();
        signup(&registry, "Chess Club", "multi@mergington.edu").unwrap();

        let all = list_activities(&registry);
        assert!(all["Basketball"].has_participant("multi@mergington.edu"));
        assert!(all["Chess Club"].has_participant("multi@mergington.edu"));
    }
}

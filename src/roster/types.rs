// Roster data types
// Defines the Activity record and the fixed table seeded at startup

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A school extracurricular with a capacity and a participant roster.
///
/// The activity name is the key of the roster map and is not duplicated
/// inside the record. `max_participants` is advertised to clients but
/// never checked on signup; capacity enforcement is a known gap carried
/// over from the behavior this service replaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Participant emails in signup order. Order carries no meaning.
    pub participants: Vec<String>,
}

fn activity(
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
) -> Activity {
    Activity {
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().map(ToString::to_string).collect(),
    }
}

/// The fixed activity table created once at process start.
///
/// Activities are never added or removed at runtime; only the
/// participant lists change through signup and unregister.
pub fn seed_activities() -> HashMap<String, Activity> {
    HashMap::from([
        (
            "Chess Club".to_string(),
            activity(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class".to_string(),
            activity(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class".to_string(),
            activity(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
        (
            "Basketball Team".to_string(),
            activity(
                "Competitive basketball training and inter-school games",
                "Wednesdays and Fridays, 4:00 PM - 5:30 PM",
                15,
                &["liam@mergington.edu", "ava@mergington.edu"],
            ),
        ),
        (
            "Tennis Club".to_string(),
            activity(
                "Tennis lessons and friendly matches on the school courts",
                "Tuesdays, 3:30 PM - 5:00 PM",
                10,
                &["noah@mergington.edu"],
            ),
        ),
        (
            "Art Studio".to_string(),
            activity(
                "Painting, drawing, and mixed media projects",
                "Thursdays, 3:30 PM - 5:00 PM",
                16,
                &["isabella@mergington.edu", "mia@mergington.edu"],
            ),
        ),
        (
            "Music Band".to_string(),
            activity(
                "School band rehearsals and seasonal performances",
                "Mondays and Wednesdays, 3:30 PM - 5:00 PM",
                25,
                &["lucas@mergington.edu"],
            ),
        ),
        (
            "Debate Team".to_string(),
            activity(
                "Public speaking practice and debate tournaments",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                12,
                &["charlotte@mergington.edu", "amelia@mergington.edu"],
            ),
        ),
        (
            "Robotics Club".to_string(),
            activity(
                "Design, build, and program robots for competitions",
                "Saturdays, 10:00 AM - 12:00 PM",
                14,
                &["ethan@mergington.edu"],
            ),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_covers_known_activities() {
        let activities = seed_activities();
        assert_eq!(activities.len(), 9);
        for name in [
            "Chess Club",
            "Basketball Team",
            "Tennis Club",
            "Art Studio",
            "Music Band",
            "Debate Team",
            "Robotics Club",
        ] {
            assert!(activities.contains_key(name), "missing seed entry: {name}");
        }
    }

    #[test]
    fn test_seed_entries_are_complete() {
        for (name, activity) in seed_activities() {
            assert!(!activity.description.is_empty(), "{name} has no description");
            assert!(!activity.schedule.is_empty(), "{name} has no schedule");
            assert!(activity.max_participants > 0, "{name} has zero capacity");
            assert!(
                activity.participants.len() <= activity.max_participants as usize,
                "{name} is seeded over capacity"
            );
        }
    }

    #[test]
    fn test_activity_serializes_with_expected_fields() {
        let activity = activity("Desc", "Mondays", 5, &["a@mergington.edu"]);
        let value = serde_json::to_value(&activity).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 4);
        for field in ["description", "schedule", "max_participants", "participants"] {
            assert!(object.contains_key(field), "missing field: {field}");
        }
        assert!(value["participants"].is_array());
    }
}

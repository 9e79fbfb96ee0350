use crate::models::{Activity, ActivityMap};

// Registry contents at process start. Restarting the server resets to this.
const SEED: &[(&str, &str, &str, u32, &[&str])] = &[
    (
        "Basketball",
        "Team-based basketball games and skill development",
        "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        15,
        &["alex@mergington.edu"],
    ),
    (
        "Tennis Club",
        "Learn tennis techniques and compete in matches",
        "Tuesdays and Thursdays, 4:00 PM - 5:00 PM",
        10,
        &["james@mergington.edu"],
    ),
    (
        "Art Studio",
        "Painting, drawing, and mixed media art projects",
        "Wednesdays, 3:30 PM - 5:00 PM",
        18,
        &["grace@mergington.edu"],
    ),
    (
        "Drama Club",
        "Theater productions, improv, and performance arts",
        "Fridays, 4:00 PM - 5:30 PM",
        25,
        &["noah@mergington.edu", "ava@mergington.edu"],
    ),
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    ),
];

pub fn seed_activities() -> ActivityMap {
    SEED.iter()
        .map(|(name, description, schedule, max, participants)| {
            (
                name.to_string(),
                Activity::new(description, schedule, *max, participants),
            )
        })
        .collect()
}

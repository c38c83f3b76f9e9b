use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One extracurricular offering. The activity name is the catalog key,
/// not a field, so `GET /activities` serializes as an object keyed by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    // Declared capacity. Signups are not checked against it.
    pub max_participants: u32,
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
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

/// The fixed catalog the process starts with. Activities are never created,
/// renamed, or deleted after this.
pub fn seed_catalog() -> HashMap<String, Activity> {
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
            "Soccer Team".to_string(),
            activity(
                "Join the soccer team and compete in inter-school tournaments",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                25,
                &[],
            ),
        ),
        (
            "Basketball Team".to_string(),
            activity(
                "Practice basketball and participate in league matches",
                "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
                20,
                &[],
            ),
        ),
        (
            "Drama Club".to_string(),
            activity(
                "Explore acting, stage production, and perform in school plays",
                "Mondays, 3:30 PM - 5:00 PM",
                15,
                &[],
            ),
        ),
        (
            "Art Workshop".to_string(),
            activity(
                "Learn painting, sketching, and other artistic techniques",
                "Thursdays, 3:30 PM - 5:00 PM",
                10,
                &[],
            ),
        ),
        (
            "Math Club".to_string(),
            activity(
                "Solve challenging math problems and prepare for competitions",
                "Fridays, 3:30 PM - 4:30 PM",
                15,
                &[],
            ),
        ),
        (
            "Debate Team".to_string(),
            activity(
                "Develop public speaking skills and compete in debates",
                "Tuesdays, 3:30 PM - 4:30 PM",
                12,
                &[],
            ),
        ),
    ])
}

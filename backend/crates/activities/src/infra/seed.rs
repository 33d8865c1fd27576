//! Seed Catalog
//!
//! The activities offered at Mergington High School when the server starts.

use crate::domain::entities::Activity;

pub fn mergington_activities() -> Vec<Activity> {
    vec![
        Activity::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        )
        .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        Activity::new(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
        )
        .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        Activity::new(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
        )
        .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        Activity::new(
            "Soccer Team",
            "Join the school soccer team and compete in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
        )
        .with_participants(["liam@mergington.edu", "noah@mergington.edu"]),
        Activity::new(
            "Basketball Team",
            "Practice and play basketball with the school team",
            "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
            15,
        )
        .with_participants(["ava@mergington.edu", "mia@mergington.edu"]),
        Activity::new(
            "Art Club",
            "Explore your creativity through painting and drawing",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
        )
        .with_participants(["amelia@mergington.edu", "harper@mergington.edu"]),
        Activity::new(
            "Drama Club",
            "Act, direct, and produce plays and performances",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            20,
        )
        .with_participants(["ella@mergington.edu", "scarlett@mergington.edu"]),
        Activity::new(
            "Math Club",
            "Solve challenging problems and participate in math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
        )
        .with_participants(["james@mergington.edu", "benjamin@mergington.edu"]),
        Activity::new(
            "Debate Team",
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
        )
        .with_participants(["charlotte@mergington.edu", "henry@mergington.edu"]),
    ]
}

//! Seed data for the activity table
//!
//! The built-in seed is what the school starts every term with. A JSON file in
//! the same shape as the `GET /activities` response can replace it.

use std::{fs, io, path::Path};

use thiserror::Error;
use tracing::debug;

use super::table::{ActivityEntries, ActivityTable, TableError};
use crate::models::Activity;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse seed file {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid activity in seed file {path}: {source}")]
    Invalid {
        path: String,
        #[source]
        source: TableError,
    },

    #[error("seed file {0} contains no activities")]
    Empty(String),
}

/// The 9 activities every process starts with
pub fn default_activities() -> ActivityTable {
    let activities = [
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Basketball Team",
            Activity::new(
                "Practice drills and play in the interschool league",
                "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
                15,
            )
            .with_participants(["liam@mergington.edu"]),
        ),
        (
            "Tennis Club",
            Activity::new(
                "Improve your serve and play friendly matches",
                "Wednesdays, 3:30 PM - 5:00 PM",
                10,
            )
            .with_participants(["ava@mergington.edu"]),
        ),
        (
            "Art Studio",
            Activity::new(
                "Explore painting, drawing and sculpture",
                "Thursdays, 3:30 PM - 5:00 PM",
                18,
            )
            .with_participants(["mia@mergington.edu", "noah@mergington.edu"]),
        ),
        (
            "Drama Club",
            Activity::new(
                "Rehearse and stage the school plays",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                25,
            )
            .with_participants(["isabella@mergington.edu"]),
        ),
        (
            "Debate Team",
            Activity::new(
                "Sharpen argumentation and compete in debate tournaments",
                "Fridays, 4:00 PM - 5:30 PM",
                16,
            )
            .with_participants(["ethan@mergington.edu", "amelia@mergington.edu"]),
        ),
        (
            "Science Olympiad",
            Activity::new(
                "Prepare for regional science competitions",
                "Saturdays, 10:00 AM - 12:00 PM",
                20,
            )
            .with_participants(["lucas@mergington.edu"]),
        ),
    ];

    let mut table = ActivityTable::new();
    for (name, activity) in activities {
        if let Err(e) = table.insert(name, activity) {
            tracing::error!("Skipping invalid built-in activity: {}", e);
        }
    }
    table
}

/// Load an activity table from a JSON file
pub fn load_seed_file(path: impl AsRef<Path>) -> Result<ActivityTable, SeedError> {
    let path = path.as_ref();
    let display = path.display().to_string();
    debug!("Loading seed activities from {}", path.display());

    let content = fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: display.clone(),
        source,
    })?;
    let entries: ActivityEntries =
        serde_json::from_str(&content).map_err(|source| SeedError::Json {
            path: display.clone(),
            source,
        })?;
    let table = ActivityTable::try_from(entries).map_err(|source| SeedError::Invalid {
        path: display.clone(),
        source,
    })?;

    if table.is_empty() {
        return Err(SeedError::Empty(display));
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_activities() {
        let table = default_activities();
        assert_eq!(table.len(), 9);

        let chess = table.get("Chess Club").unwrap();
        assert_eq!(chess.max_participants, 12);
        assert_eq!(
            chess.participants,
            vec!["michael@mergington.edu", "daniel@mergington.edu"]
        );
        assert_eq!(table.names().next(), Some("Chess Club"));
    }

    #[test]
    fn test_default_activities_round_trip_through_loader() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string_pretty(&default_activities()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = load_seed_file(file.path()).unwrap();
        assert_eq!(loaded, default_activities());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_seed_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, SeedError::Io { .. }));
    }

    #[test]
    fn test_load_rejects_bad_json_and_empty_tables() {
        let mut bad = tempfile::NamedTempFile::new().unwrap();
        bad.write_all(b"{ not json").unwrap();
        assert!(matches!(
            load_seed_file(bad.path()).unwrap_err(),
            SeedError::Json { .. }
        ));

        let mut empty = tempfile::NamedTempFile::new().unwrap();
        empty.write_all(b"{}").unwrap();
        assert!(matches!(
            load_seed_file(empty.path()).unwrap_err(),
            SeedError::Empty(_)
        ));
    }

    fn write_seed(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_rejects_duplicate_participants() {
        let file = write_seed(
            r#"{"Chess Club": {
                "description": "d", "schedule": "s", "max_participants": 3,
                "participants": ["a@x.edu", "a@x.edu"]
            }}"#,
        );

        let err = load_seed_file(file.path()).unwrap_err();
        match err {
            SeedError::Invalid { source, .. } => assert_eq!(
                source,
                TableError::DuplicateParticipant {
                    activity: "Chess Club".to_string(),
                    email: "a@x.edu".to_string(),
                }
            ),
            other => panic!("expected invalid seed, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_duplicate_names_and_zero_capacity() {
        let duplicate = write_seed(
            r#"{
                "Chess Club": {"description": "a", "schedule": "b", "max_participants": 2, "participants": []},
                "Chess Club": {"description": "c", "schedule": "d", "max_participants": 2, "participants": []}
            }"#,
        );
        assert!(matches!(
            load_seed_file(duplicate.path()).unwrap_err(),
            SeedError::Invalid {
                source: TableError::DuplicateActivity(_),
                ..
            }
        ));

        let zero = write_seed(
            r#"{"Void": {"description": "a", "schedule": "b", "max_participants": 0, "participants": []}}"#,
        );
        assert!(matches!(
            load_seed_file(zero.path()).unwrap_err(),
            SeedError::Invalid {
                source: TableError::ZeroCapacity(_),
                ..
            }
        ));
    }
}

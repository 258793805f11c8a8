use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An extracurricular activity and the students signed up for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Activity {
    /// Free-text description
    pub description: String,

    /// When the activity meets
    pub schedule: String,

    /// Advertised capacity. Reported to clients, not enforced on signup.
    pub max_participants: u32,

    /// Participant emails in signup order
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    /// Whether `email` is already in the participant list
    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Remaining capacity, saturating at zero when over-subscribed
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_registered_matches_exact_email() {
        let activity = Activity::new("Chess", "Fridays", 12)
            .with_participants(["michael@mergington.edu"]);

        assert!(activity.is_registered("michael@mergington.edu"));
        assert!(!activity.is_registered("Michael@mergington.edu"));
        assert!(!activity.is_registered(""));
    }

    #[test]
    fn test_spots_left_saturates() {
        let activity = Activity::new("Tiny", "Never", 1).with_participants(["a@x.edu", "b@x.edu"]);
        assert_eq!(activity.spots_left(), 0);

        let activity = Activity::new("Roomy", "Always", 10).with_participants(["a@x.edu"]);
        assert_eq!(activity.spots_left(), 9);
    }

    #[test]
    fn test_serializes_with_wire_field_names() {
        let activity = Activity::new("Chess", "Fridays", 12).with_participants(["a@x.edu"]);
        let value = serde_json::to_value(&activity).unwrap();

        assert_eq!(value["description"], "Chess");
        assert_eq!(value["schedule"], "Fridays");
        assert_eq!(value["max_participants"], 12);
        assert_eq!(value["participants"], serde_json::json!(["a@x.edu"]));
    }
}

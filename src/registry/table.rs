use std::fmt;

use serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, MapAccess, Visitor},
    ser::SerializeMap,
};

use crate::models::Activity;

/// Activity name -> activity, kept in insertion order.
///
/// Serializes as a JSON object whose keys follow the order activities were
/// added, which is the order clients see from `GET /activities`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityTable {
    entries: Vec<(String, Activity)>,
}

/// Reasons a table cannot be built from the given activities
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("duplicate activity name: {0}")]
    DuplicateActivity(String),

    #[error("activity {activity} lists {email} more than once")]
    DuplicateParticipant { activity: String, email: String },

    #[error("activity {0} must allow at least one participant")]
    ZeroCapacity(String),
}

impl ActivityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an activity, validating the table invariants
    pub fn insert(&mut self, name: impl Into<String>, activity: Activity) -> Result<(), TableError> {
        let name = name.into();
        if self.contains(&name) {
            return Err(TableError::DuplicateActivity(name));
        }
        if activity.max_participants == 0 {
            return Err(TableError::ZeroCapacity(name));
        }
        for (i, email) in activity.participants.iter().enumerate() {
            if activity.participants[..i].contains(email) {
                return Err(TableError::DuplicateParticipant {
                    activity: name,
                    email: email.clone(),
                });
            }
        }
        self.entries.push((name, activity));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, activity)| activity)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.entries
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, activity)| activity)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl Serialize for ActivityTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, activity) in &self.entries {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

/// Activities in document order, before the table invariants are checked
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityEntries(pub Vec<(String, Activity)>);

struct ActivityEntriesVisitor;

impl<'de> Visitor<'de> for ActivityEntriesVisitor {
    type Value = ActivityEntries;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of activity name to activity")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(entry) = access.next_entry::<String, Activity>()? {
            entries.push(entry);
        }
        Ok(ActivityEntries(entries))
    }
}

impl<'de> Deserialize<'de> for ActivityEntries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ActivityEntriesVisitor)
    }
}

impl TryFrom<ActivityEntries> for ActivityTable {
    type Error = TableError;

    fn try_from(entries: ActivityEntries) -> Result<Self, Self::Error> {
        let mut table = ActivityTable::new();
        for (name, activity) in entries.0 {
            table.insert(name, activity)?;
        }
        Ok(table)
    }
}

impl<'de> Deserialize<'de> for ActivityTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = ActivityEntries::deserialize(deserializer)?;
        ActivityTable::try_from(entries).map_err(de::Error::custom)
    }
}

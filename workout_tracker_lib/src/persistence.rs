use std::{cell::RefCell, collections::HashMap};

use crate::{workout::Workout, Result};

/// String key-value storage, e.g. the browser's `localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// In-process storage, used off the browser and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Reads and writes the whole workout list as one JSON array under a fixed key.
/// Marker handles never reach this layer; they are kept by the tracker.
pub struct WorkoutPersistence<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> WorkoutPersistence<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn save(&self, workouts: &[Workout]) -> Result<()> {
        let json = serde_json::to_string(workouts)?;
        self.storage.set(&self.key, &json)
    }

    /// A missing key or unreadable contents both give an empty list.
    pub fn load(&self) -> Vec<Workout> {
        let json = match self.storage.get(&self.key) {
            Ok(Some(json)) => json,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::error!("Failed to read stored workouts: {err}");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Option<Vec<Workout>>>(&json) {
            Ok(workouts) => workouts.unwrap_or_default(),
            Err(err) => {
                tracing::warn!("Ignoring malformed workouts under '{}': {err}", self.key);
                Vec::new()
            }
        }
    }

    pub fn clear(&self) -> Result<()> {
        self.storage.remove(&self.key)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;
    use crate::workout::Coords;

    fn sample() -> Vec<Workout> {
        let date = DateTime::parse_from_rfc3339("2025-03-09T17:45:12.345+01:00").unwrap();
        vec![
            Workout::running("1741538712".into(), date, Coords(56.175188, 10.196123), 4.3, 27.0, 163.0),
            Workout::cycling("1741538799".into(), date, Coords(55.67, 12.56), 31.7, 83.0, -12.5),
            Workout::running("1741538801".into(), date, Coords(-33.9, 151.2), 0.1, 0.7, 1.0),
        ]
    }

    #[test]
    fn load_save_round_trip() {
        let persistence = WorkoutPersistence::new(MemoryStore::new(), "workouts");
        let workouts = sample();

        persistence.save(&workouts).unwrap();
        assert_eq!(persistence.load(), workouts);
    }

    #[test]
    fn round_trip_at_float_range_edges() {
        let date = DateTime::parse_from_rfc3339("2025-03-09T17:45:12+01:00").unwrap();
        let workouts = vec![
            Workout::running("1".into(), date, Coords(89.999999, -179.999999), 1e-300, 1e-300, 1e-300),
            Workout::running("2".into(), date, Coords(0.0, 0.0), 1e300, 7e-5, 250.0),
            Workout::cycling("3".into(), date, Coords(-90.0, 180.0), f64::MAX, 60.0, f64::MIN),
            Workout::cycling("4".into(), date, Coords(0.1, 0.2), 5e-324, 1e-300, 0.1 + 0.2),
        ];

        let persistence = WorkoutPersistence::new(MemoryStore::new(), "workouts");
        persistence.save(&workouts).unwrap();

        let json = persistence.storage().get("workouts").unwrap().unwrap();
        assert!(!json.contains("null"));
        assert_eq!(persistence.load(), workouts);
    }

    #[test]
    fn missing_key_is_empty() {
        let persistence = WorkoutPersistence::new(MemoryStore::new(), "workouts");
        assert!(persistence.load().is_empty());
    }

    #[test]
    fn malformed_data_is_empty() {
        let storage = MemoryStore::new();
        storage.set("workouts", "{not json").unwrap();
        let persistence = WorkoutPersistence::new(storage, "workouts");
        assert!(persistence.load().is_empty());

        persistence.storage().set("workouts", "null").unwrap();
        assert!(persistence.load().is_empty());

        persistence.storage().set("workouts", r#"[{"id":"1"}]"#).unwrap();
        assert!(persistence.load().is_empty());
    }

    #[test]
    fn clear_removes_key() {
        let persistence = WorkoutPersistence::new(MemoryStore::new(), "workouts");
        persistence.save(&sample()).unwrap();
        assert!(persistence.storage().contains_key("workouts"));

        persistence.clear().unwrap();
        assert!(!persistence.storage().contains_key("workouts"));
        assert!(persistence.load().is_empty());
    }

    #[test]
    fn derived_fields_come_from_storage() {
        let storage = MemoryStore::new();
        let json = r#"[{"id":"7","date":"2025-03-09T17:45:12+01:00","coords":[1.0,2.0],"distance":5.0,"duration":30.0,"description":"Running on March 9","type":"running","cadence":150.0,"pace":99.0}]"#;
        storage.set("workouts", json).unwrap();

        let loaded = WorkoutPersistence::new(storage, "workouts").load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(
            loaded[0].activity(),
            &crate::workout::Activity::Running { cadence: 150.0, pace: 99.0 }
        );
    }
}

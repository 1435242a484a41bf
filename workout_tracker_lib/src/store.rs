use crate::{
    workout::{Workout, WorkoutId},
    Result, TrackerError,
};

/// Ordered workouts in insertion order. Ids are unique.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkoutStore {
    workouts: Vec<Workout>,
}

impl WorkoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from persisted records. Later duplicates of an id are dropped.
    pub fn from_workouts(workouts: Vec<Workout>) -> Self {
        let mut store = Self::new();
        for workout in workouts {
            if let Err(err) = store.append(workout) {
                tracing::warn!("Skipping persisted workout: {err}");
            }
        }
        store
    }

    pub fn append(&mut self, workout: Workout) -> Result<()> {
        if self.contains(workout.id()) {
            return Err(TrackerError::DuplicateId(workout.id().clone()));
        }

        self.workouts.push(workout);
        Ok(())
    }

    pub fn remove_by_id(&mut self, id: &WorkoutId) -> Result<Workout> {
        let index = self
            .workouts
            .iter()
            .position(|w| w.id() == id)
            .ok_or_else(|| TrackerError::NotFound(id.clone()))?;

        Ok(self.workouts.remove(index))
    }

    pub fn clear(&mut self) {
        self.workouts.clear();
    }

    pub fn all(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn find_by_id(&self, id: &WorkoutId) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id() == id)
    }

    pub fn contains(&self, id: &WorkoutId) -> bool {
        self.find_by_id(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;
    use crate::workout::Coords;

    fn workout(id: &str) -> Workout {
        let date = DateTime::parse_from_rfc3339("2025-06-01T10:00:00+00:00").unwrap();
        Workout::running(id.into(), date, Coords(1.0, 2.0), 5.0, 30.0, 150.0)
    }

    #[test]
    fn append_keeps_insertion_order() {
        let mut store = WorkoutStore::new();
        store.append(workout("b")).unwrap();
        store.append(workout("a")).unwrap();
        store.append(workout("c")).unwrap();

        let ids: Vec<&str> = store.all().iter().map(|w| w.id().as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }

    #[test]
    fn append_rejects_duplicate_id() {
        let mut store = WorkoutStore::new();
        store.append(workout("a")).unwrap();

        let err = store.append(workout("a")).unwrap_err();
        assert_eq!(err, TrackerError::DuplicateId("a".into()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn append_then_remove_restores_prior_state() {
        let mut store = WorkoutStore::new();
        store.append(workout("a")).unwrap();
        store.append(workout("b")).unwrap();
        let before = store.clone();

        store.append(workout("c")).unwrap();
        let removed = store.remove_by_id(&"c".into()).unwrap();

        assert_eq!(removed.id().as_str(), "c");
        assert_eq!(store, before);
    }

    #[test]
    fn remove_missing_is_not_found() {
        let mut store = WorkoutStore::new();
        store.append(workout("a")).unwrap();

        assert_eq!(store.remove_by_id(&"x".into()).unwrap_err(), TrackerError::NotFound("x".into()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn find_and_clear() {
        let mut store = WorkoutStore::new();
        store.append(workout("a")).unwrap();

        assert!(store.find_by_id(&"a".into()).is_some());
        assert!(store.find_by_id(&"b".into()).is_none());

        store.clear();
        assert!(store.is_empty());
        assert!(store.all().is_empty());
    }

    #[test]
    fn from_workouts_drops_duplicates() {
        let store = WorkoutStore::from_workouts(vec![workout("a"), workout("b"), workout("a")]);
        assert_eq!(store.len(), 2);
    }
}

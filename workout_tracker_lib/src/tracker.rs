use std::{collections::HashMap, time::Duration};

use chrono::{DateTime, FixedOffset};

use crate::{
    config::TrackerConfig,
    display::{self, MarkerPopup, WorkoutRow},
    map::MapAdapter,
    persistence::{KeyValueStore, WorkoutPersistence},
    store::WorkoutStore,
    validation::{self, RawWorkoutInput},
    workout::{Coords, Workout, WorkoutId},
    Result, TrackerError,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormState {
    Idle,
    /// The form is open for a workout at `target`.
    AwaitingInput { target: Coords },
}

/// How the form should appear after a map click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormReveal {
    Immediate,
    Delayed(Duration),
}

/// Owns the workouts and keeps the map markers and storage in sync with them.
pub struct WorkoutTracker<S, M: MapAdapter> {
    config: TrackerConfig,
    store: WorkoutStore,
    persistence: WorkoutPersistence<S>,
    map: Option<M>,
    // Only present while a map is attached, never persisted.
    markers: HashMap<WorkoutId, M::Marker>,
    form: FormState,
    form_shown_before: bool,
}

impl<S: KeyValueStore, M: MapAdapter> WorkoutTracker<S, M> {
    pub fn new(config: TrackerConfig, storage: S) -> Self {
        let persistence = WorkoutPersistence::new(storage, config.storage_key.clone());
        let store = WorkoutStore::from_workouts(persistence.load());
        tracing::info!("Loaded {} workouts", store.len());

        Self {
            config,
            store,
            persistence,
            map: None,
            markers: HashMap::new(),
            form: FormState::Idle,
            form_shown_before: false,
        }
    }

    /// Attaches the map once it is ready and places a marker for every loaded workout.
    pub fn attach_map(&mut self, mut map: M) {
        for workout in self.store.all() {
            let marker = map.place_marker(workout.coords(), &MarkerPopup::for_workout(workout));
            self.markers.insert(workout.id().clone(), marker);
        }
        tracing::debug!("Map attached with {} markers", self.markers.len());
        self.map = Some(map);
    }

    pub fn map_clicked(&mut self, coords: Coords) -> FormReveal {
        self.form = FormState::AwaitingInput { target: coords };

        if self.form_shown_before {
            FormReveal::Immediate
        } else {
            self.form_shown_before = true;
            FormReveal::Delayed(self.config.first_form_delay)
        }
    }

    pub fn hide_form(&mut self) {
        self.form = FormState::Idle;
    }

    /// Validates the form and records a workout at the clicked location.
    /// On rejection nothing changes and the form stays open.
    pub fn submit(&mut self, raw: &RawWorkoutInput, now: DateTime<FixedOffset>) -> Result<WorkoutId> {
        let FormState::AwaitingInput { target } = self.form else {
            return Err(TrackerError::NoPendingLocation);
        };

        let input = validation::validate(raw)?;
        let id = self.next_id(now.timestamp_millis());
        let workout = Workout::from_input(id.clone(), now, target, &input);
        let popup = MarkerPopup::for_workout(&workout);

        self.store.append(workout)?;
        if let Some(map) = self.map.as_mut() {
            let marker = map.place_marker(target, &popup);
            self.markers.insert(id.clone(), marker);
        }

        tracing::info!("Added workout {id}: {}", popup.content);
        self.persist();
        self.form = FormState::Idle;

        Ok(id)
    }

    pub fn delete(&mut self, id: &WorkoutId) -> Result<Workout> {
        let workout = self.store.remove_by_id(id)?;
        self.remove_marker(id);
        tracing::info!("Removed workout {id}");
        self.persist();
        Ok(workout)
    }

    pub fn delete_all(&mut self) {
        if let Some(map) = self.map.as_mut() {
            for (_, marker) in self.markers.drain() {
                map.remove_marker(marker);
            }
        }
        self.markers.clear();
        self.store.clear();

        if let Err(err) = self.persistence.clear() {
            tracing::error!("Failed to erase stored workouts: {err}");
        }
        tracing::info!("Cleared all workouts");
    }

    /// Centers the map on a workout. Does nothing to the form.
    pub fn select(&mut self, id: &WorkoutId) -> Result<()> {
        let coords = self
            .store
            .find_by_id(id)
            .map(Workout::coords)
            .ok_or_else(|| TrackerError::NotFound(id.clone()))?;

        if let Some(map) = self.map.as_mut() {
            map.recenter(coords, self.config.zoom, true);
        }
        Ok(())
    }

    pub fn workouts(&self) -> &[Workout] {
        self.store.all()
    }

    pub fn rows(&self) -> Vec<WorkoutRow> {
        display::workout_rows(self.store.all())
    }

    pub fn has_workouts(&self) -> bool {
        !self.store.is_empty()
    }

    pub fn form_state(&self) -> FormState {
        self.form
    }

    pub fn is_form_open(&self) -> bool {
        matches!(self.form, FormState::AwaitingInput { .. })
    }

    /// The start hint is hidden after the first click or once there is anything to list.
    pub fn show_start_screen(&self) -> bool {
        !self.form_shown_before && self.store.is_empty()
    }

    pub fn map(&self) -> Option<&M> {
        self.map.as_ref()
    }

    pub fn map_mut(&mut self) -> Option<&mut M> {
        self.map.as_mut()
    }

    pub fn marker_of(&self, id: &WorkoutId) -> Option<&M::Marker> {
        self.markers.get(id)
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        self.persistence.storage()
    }

    fn next_id(&self, mut millis: i64) -> WorkoutId {
        loop {
            let id = WorkoutId::from_millis(millis);
            if !self.store.contains(&id) {
                return id;
            }
            millis += 1;
        }
    }

    fn remove_marker(&mut self, id: &WorkoutId) {
        if let Some(marker) = self.markers.remove(id) {
            if let Some(map) = self.map.as_mut() {
                map.remove_marker(marker);
            }
        }
    }

    fn persist(&self) {
        if let Err(err) = self.persistence.save(self.store.all()) {
            tracing::error!("Failed to store workouts: {err}");
        }
    }
}

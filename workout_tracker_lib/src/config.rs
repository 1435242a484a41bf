use std::time::Duration;

pub const DEFAULT_STORAGE_KEY: &str = "workouts";
pub const DEFAULT_ZOOM: f64 = 13.0;
pub const FIRST_FORM_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    /// Key the workout list is stored under.
    pub storage_key: String,
    /// Zoom level used when the map is opened and when a workout is selected.
    pub zoom: f64,
    /// Delay before the form is shown the first time.
    pub first_form_delay: Duration,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            zoom: DEFAULT_ZOOM,
            first_form_delay: FIRST_FORM_DELAY,
        }
    }
}

impl TrackerConfig {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}

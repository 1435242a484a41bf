use crate::{metrics, workout::WorkoutKind, Result, TrackerError};

/// Form contents as typed by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct RawWorkoutInput {
    pub kind: WorkoutKind,
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
}

impl RawWorkoutInput {
    pub fn new(kind: WorkoutKind) -> Self {
        Self {
            kind,
            distance: String::new(),
            duration: String::new(),
            cadence: String::new(),
            elevation: String::new(),
        }
    }
}

/// Validated numbers, ready to build a workout from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutInput {
    Running { distance: f64, duration: f64, cadence: f64 },
    Cycling { distance: f64, duration: f64, elevation_gain: f64 },
}

impl WorkoutInput {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            WorkoutInput::Running { .. } => WorkoutKind::Running,
            WorkoutInput::Cycling { .. } => WorkoutKind::Cycling,
        }
    }
}

/// Distance and duration must be positive for both kinds. Running also needs a
/// positive cadence, while cycling elevation only has to be a finite number.
/// The derived pace or speed must be finite too, or it could not be stored.
pub fn validate(raw: &RawWorkoutInput) -> Result<WorkoutInput> {
    let distance = positive("distance", &raw.distance)?;
    let duration = positive("duration", &raw.duration)?;

    match raw.kind {
        WorkoutKind::Running => {
            let cadence = positive("cadence", &raw.cadence)?;
            finite_metric("pace", metrics::pace(distance, duration))?;
            Ok(WorkoutInput::Running { distance, duration, cadence })
        }
        WorkoutKind::Cycling => {
            let elevation_gain = finite("elevation", &raw.elevation)?;
            finite_metric("speed", metrics::speed(distance, duration))?;
            Ok(WorkoutInput::Cycling { distance, duration, elevation_gain })
        }
    }
}

// An empty field counts as 0, like a numeric form input coerced in the browser.
fn finite(field: &'static str, value: &str) -> Result<f64> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(0.0);
    }

    match value.parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(number),
        _ => Err(TrackerError::InvalidInput { field }),
    }
}

fn positive(field: &'static str, value: &str) -> Result<f64> {
    let number = finite(field, value)?;
    if number > 0.0 {
        Ok(number)
    } else {
        Err(TrackerError::InvalidInput { field })
    }
}

fn finite_metric(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(TrackerError::InvalidInput { field })
    }
}

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::{metrics, validation::WorkoutInput};

/// Timestamp derived identifier: the last ten digits of the creation time in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutId(String);

impl WorkoutId {
    const DIGITS: usize = 10;

    pub fn from_millis(millis: i64) -> Self {
        let digits = millis.to_string();
        let start = digits.len().saturating_sub(Self::DIGITS);
        Self(digits[start..].to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WorkoutId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for WorkoutId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// (latitude, longitude)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coords(pub f64, pub f64);

impl Coords {
    pub fn latitude(&self) -> f64 {
        self.0
    }

    pub fn longitude(&self) -> f64 {
        self.1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "running",
            WorkoutKind::Cycling => "cycling",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Cycling => "Cycling",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "🏃‍♂️",
            WorkoutKind::Cycling => "🚴‍♀️",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "running" => Some(WorkoutKind::Running),
            "cycling" => Some(WorkoutKind::Cycling),
            _ => None,
        }
    }
}

/// Variant specific fields. The derived metric is stored, not recomputed on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Activity {
    Running {
        cadence: f64,
        pace: f64,
    },
    #[serde(rename_all = "camelCase")]
    Cycling {
        elevation_gain: f64,
        speed: f64,
    },
}

impl Activity {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Activity::Running { .. } => WorkoutKind::Running,
            Activity::Cycling { .. } => WorkoutKind::Cycling,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    id: WorkoutId,
    #[serde(rename = "date")]
    created_at: DateTime<FixedOffset>,
    coords: Coords,
    distance: f64,
    duration: f64,
    description: String,
    #[serde(flatten)]
    activity: Activity,
}

impl Workout {
    pub fn running(id: WorkoutId, created_at: DateTime<FixedOffset>, coords: Coords, distance: f64, duration: f64, cadence: f64) -> Self {
        let pace = metrics::pace(distance, duration);
        Self::new(id, created_at, coords, distance, duration, Activity::Running { cadence, pace })
    }

    pub fn cycling(id: WorkoutId, created_at: DateTime<FixedOffset>, coords: Coords, distance: f64, duration: f64, elevation_gain: f64) -> Self {
        let speed = metrics::speed(distance, duration);
        Self::new(id, created_at, coords, distance, duration, Activity::Cycling { elevation_gain, speed })
    }

    pub fn from_input(id: WorkoutId, created_at: DateTime<FixedOffset>, coords: Coords, input: &WorkoutInput) -> Self {
        match *input {
            WorkoutInput::Running { distance, duration, cadence } => {
                Self::running(id, created_at, coords, distance, duration, cadence)
            }
            WorkoutInput::Cycling { distance, duration, elevation_gain } => {
                Self::cycling(id, created_at, coords, distance, duration, elevation_gain)
            }
        }
    }

    fn new(id: WorkoutId, created_at: DateTime<FixedOffset>, coords: Coords, distance: f64, duration: f64, activity: Activity) -> Self {
        let description = describe(activity.kind(), &created_at);
        Self {
            id,
            created_at,
            coords,
            distance,
            duration,
            description,
            activity,
        }
    }

    pub fn id(&self) -> &WorkoutId {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<FixedOffset> {
        self.created_at
    }

    pub fn coords(&self) -> Coords {
        self.coords
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn activity(&self) -> &Activity {
        &self.activity
    }

    pub fn kind(&self) -> WorkoutKind {
        self.activity.kind()
    }
}

// "Running on April 14"
fn describe(kind: WorkoutKind, created_at: &DateTime<FixedOffset>) -> String {
    format!("{} on {}", kind.label(), created_at.format("%B %-d"))
}

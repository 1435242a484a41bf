use crate::workout::{Activity, Workout, WorkoutId, WorkoutKind};

pub const POPUP_MIN_WIDTH: f64 = 100.;
pub const POPUP_MAX_WIDTH: f64 = 250.;

/// Popup shown on a workout's map marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerPopup {
    pub content: String,
    pub class_name: String,
}

impl MarkerPopup {
    pub fn for_workout(workout: &Workout) -> Self {
        let kind = workout.kind();
        Self {
            content: format!("{} {}", kind.icon(), workout.description()),
            class_name: format!("{}-popup", kind.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutDetail {
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str,
}

impl WorkoutDetail {
    fn new(icon: &'static str, value: String, unit: &'static str) -> Self {
        Self { icon, value, unit }
    }
}

/// One entry of the workout list.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutRow {
    pub id: WorkoutId,
    pub kind: WorkoutKind,
    pub title: String,
    pub details: Vec<WorkoutDetail>,
}

impl From<&Workout> for WorkoutRow {
    fn from(workout: &Workout) -> Self {
        let kind = workout.kind();
        let mut details = vec![
            WorkoutDetail::new(kind.icon(), workout.distance().to_string(), "km"),
            WorkoutDetail::new("⏱", workout.duration().to_string(), "min"),
        ];

        // Metrics are rounded here only; the stored values keep full precision.
        match *workout.activity() {
            Activity::Running { cadence, pace } => {
                details.push(WorkoutDetail::new("⚡️", format!("{pace:.1}"), "min/km"));
                details.push(WorkoutDetail::new("🦶🏼", cadence.to_string(), "spm"));
            }
            Activity::Cycling { elevation_gain, speed } => {
                details.push(WorkoutDetail::new("⚡️", format!("{speed:.1}"), "km/h"));
                details.push(WorkoutDetail::new("⛰", elevation_gain.to_string(), "m"));
            }
        }

        Self {
            id: workout.id().clone(),
            kind,
            title: workout.description().to_owned(),
            details,
        }
    }
}

/// Rows in display order, newest first.
pub fn workout_rows(workouts: &[Workout]) -> Vec<WorkoutRow> {
    workouts.iter().rev().map(WorkoutRow::from).collect()
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;
    use crate::workout::Coords;

    fn date() -> DateTime<chrono::FixedOffset> {
        DateTime::parse_from_rfc3339("2025-07-04T06:00:00+00:00").unwrap()
    }

    #[test]
    fn running_row() {
        let workout = Workout::running("1".into(), date(), Coords(0., 0.), 4.2, 25.0, 170.0);
        let row = WorkoutRow::from(&workout);

        assert_eq!(row.title, "Running on July 4");
        let values: Vec<(&str, &str)> = row.details.iter().map(|d| (d.value.as_str(), d.unit)).collect();
        assert_eq!(values, [("4.2", "km"), ("25", "min"), ("6.0", "min/km"), ("170", "spm")]);
    }

    #[test]
    fn cycling_row() {
        let workout = Workout::cycling("2".into(), date(), Coords(0., 0.), 27.0, 95.0, -40.0);
        let row = WorkoutRow::from(&workout);

        assert_eq!(row.details[0].icon, "🚴‍♀️");
        assert_eq!(row.details[2].value, "17.1");
        assert_eq!(row.details[2].unit, "km/h");
        assert_eq!(row.details[3].value, "-40");
    }

    #[test]
    fn popup_text_and_class() {
        let workout = Workout::cycling("2".into(), date(), Coords(0., 0.), 27.0, 95.0, 0.0);
        let popup = MarkerPopup::for_workout(&workout);

        assert_eq!(popup.content, "🚴‍♀️ Cycling on July 4");
        assert_eq!(popup.class_name, "cycling-popup");
    }

    #[test]
    fn rows_are_newest_first() {
        let workouts = vec![
            Workout::running("1".into(), date(), Coords(0., 0.), 1.0, 1.0, 1.0),
            Workout::running("2".into(), date(), Coords(0., 0.), 1.0, 1.0, 1.0),
        ];
        let ids: Vec<String> = workout_rows(&workouts).into_iter().map(|r| r.id.to_string()).collect();
        assert_eq!(ids, ["2", "1"]);
    }
}

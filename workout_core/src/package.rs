//! Sensor packages and the dispatch from workout-type codes to records.
//!
//! A package is a workout-type code plus the positional values read from the
//! sensor block. [`read_package`] validates the values and builds the
//! matching [`Workout`] record.

use crate::config::FormulaConfig;
use crate::training::{Readings, Running, SportsWalking, Swimming, Workout};
use crate::{Error, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Supported workout types, keyed by their three-letter codes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WorkoutType {
    Swimming,
    Running,
    SportsWalking,
}

impl WorkoutType {
    pub const ALL: [WorkoutType; 3] = [
        WorkoutType::Swimming,
        WorkoutType::Running,
        WorkoutType::SportsWalking,
    ];

    /// Look up a workout type by its exact (case-sensitive) code
    pub fn from_code(code: &str) -> Result<Self> {
        match code {
            "SWM" => Ok(WorkoutType::Swimming),
            "RUN" => Ok(WorkoutType::Running),
            "WLK" => Ok(WorkoutType::SportsWalking),
            other => Err(Error::InvalidWorkoutType(other.to_string())),
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            WorkoutType::Swimming => "SWM",
            WorkoutType::Running => "RUN",
            WorkoutType::SportsWalking => "WLK",
        }
    }

    /// Name used in reports
    pub fn label(self) -> &'static str {
        match self {
            WorkoutType::Swimming => "Swimming",
            WorkoutType::Running => "Running",
            WorkoutType::SportsWalking => "SportsWalking",
        }
    }

    /// Positional fields, in the order a package must supply them
    pub fn field_names(self) -> &'static [&'static str] {
        match self {
            WorkoutType::Swimming => &["action", "duration", "weight", "pool_length", "pool_laps"],
            WorkoutType::Running => &["action", "duration", "weight"],
            WorkoutType::SportsWalking => &["action", "duration", "weight", "height"],
        }
    }

    pub fn arity(self) -> usize {
        self.field_names().len()
    }
}

/// Raw workout data as delivered by a sensor block
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }

    /// Build the workout record for this package
    pub fn to_workout(&self, formulas: &FormulaConfig) -> Result<Workout> {
        read_package_with(&self.workout_type, &self.data, formulas)
    }
}

static DEMO_PACKAGES: Lazy<Vec<Package>> = Lazy::new(|| {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
});

/// The fixed demonstration dataset
pub fn demo_packages() -> &'static [Package] {
    &DEMO_PACKAGES
}

/// Build a workout record from a type code and positional values
///
/// Uses the default formula policy. See [`read_package_with`].
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout> {
    read_package_with(workout_type, data, &FormulaConfig::default())
}

/// Build a workout record from a type code and positional values
///
/// Fails with [`Error::InvalidWorkoutType`] for an unknown code,
/// [`Error::Arity`] when the value count does not match the type,
/// [`Error::InvalidValue`] for unusable values and
/// [`Error::InvalidDuration`] when the duration is not positive.
pub fn read_package_with(
    workout_type: &str,
    data: &[f64],
    formulas: &FormulaConfig,
) -> Result<Workout> {
    let kind = WorkoutType::from_code(workout_type)?;

    if data.len() != kind.arity() {
        return Err(Error::Arity {
            workout_type: kind.code().to_string(),
            expected: kind.arity(),
            actual: data.len(),
        });
    }

    let readings = Readings::new(
        whole_number("action", data[0])?,
        positive_duration(data[1])?,
        non_negative("weight", data[2])?,
    );

    let workout = match kind {
        WorkoutType::Running => Workout::Running(Running::new(readings)),
        WorkoutType::SportsWalking => Workout::SportsWalking(
            SportsWalking::new(readings, positive("height", data[3])?)
                .with_division(formulas.walking_division),
        ),
        WorkoutType::Swimming => {
            let laps = whole_number("pool_laps", data[4])?;
            let laps = u32::try_from(laps).map_err(|_| Error::InvalidValue {
                field: "pool_laps",
                value: data[4],
            })?;
            Workout::Swimming(Swimming::new(
                readings,
                non_negative("pool_length", data[3])?,
                laps,
            ))
        }
    };

    tracing::debug!("Built {} record from {:?}", kind.label(), data);
    Ok(workout)
}

fn non_negative(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidValue { field, value })
    }
}

// Used as a divisor by the walking formula
fn positive(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidValue { field, value })
    }
}

fn whole_number(field: &'static str, value: f64) -> Result<u64> {
    let value = non_negative(field, value)?;
    if value.fract() != 0.0 || value >= u64::MAX as f64 {
        return Err(Error::InvalidValue { field, value });
    }
    Ok(value as u64)
}

fn positive_duration(value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::InvalidValue {
            field: "duration",
            value,
        });
    }
    if value <= 0.0 {
        return Err(Error::InvalidDuration(value));
    }
    Ok(value)
}

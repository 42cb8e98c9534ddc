//! Workout records and the metric formulas for each workout type.
//!
//! Every record shares a [`Readings`] block (action count, duration, weight).
//! The [`Training`] trait provides the generic distance and speed formulas;
//! each workout type supplies its own calorie formula and may override the
//! step length or the speed formula (swimming does both).

use crate::message::InfoMessage;
use serde::{Deserialize, Serialize};

// ============================================================================
// Constants
// ============================================================================

/// Metres in a kilometre
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;

/// Distance covered by one step, in metres
pub const LEN_STEP_M: f64 = 0.65;

/// Distance covered by one swimming stroke, in metres
pub const LEN_STROKE_M: f64 = 1.38;

const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 20.0;

const WALK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WALK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

const SWIM_SPEED_SHIFT: f64 = 1.1;
const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;

// ============================================================================
// Shared readings
// ============================================================================

/// Raw sensor readings common to every workout type
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Readings {
    /// Steps or strokes
    pub action: u64,
    pub duration_h: f64,
    pub weight_kg: f64,
}

impl Readings {
    pub fn new(action: u64, duration_h: f64, weight_kg: f64) -> Self {
        Self {
            action,
            duration_h,
            weight_kg,
        }
    }
}

/// How the walking formula divides squared speed by height
///
/// `Floor` keeps the floor division of the historical formula, which makes
/// the speed term vanish for any realistic walking speed. `True` uses real
/// division.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WalkingDivision {
    #[default]
    Floor,
    True,
}

impl WalkingDivision {
    fn apply(self, numerator: f64, denominator: f64) -> f64 {
        match self {
            WalkingDivision::Floor => (numerator / denominator).floor(),
            WalkingDivision::True => numerator / denominator,
        }
    }
}

// ============================================================================
// Training trait
// ============================================================================

/// Metric formulas shared by all workout types
pub trait Training {
    /// Workout type name used in reports (e.g. "Running")
    fn label(&self) -> &'static str;

    fn readings(&self) -> &Readings;

    /// Calories spent during the workout
    fn spent_calories(&self) -> f64;

    /// Distance covered by one action unit, in metres
    fn step_length_m(&self) -> f64 {
        LEN_STEP_M
    }

    /// Distance in kilometres
    fn distance_km(&self) -> f64 {
        self.readings().action as f64 * self.step_length_m() / M_IN_KM
    }

    /// Mean speed in km/h
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.readings().duration_h
    }

    /// Collect all metrics into a report message
    fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.label().to_string(),
            duration: self.readings().duration_h,
            distance: self.distance_km(),
            speed: self.mean_speed_kmh(),
            calories: self.spent_calories(),
        }
    }
}

// ============================================================================
// Workout types
// ============================================================================

/// Running workout
#[derive(Clone, Debug, PartialEq)]
pub struct Running {
    pub readings: Readings,
}

impl Running {
    pub fn new(readings: Readings) -> Self {
        Self { readings }
    }
}

impl Training for Running {
    fn label(&self) -> &'static str {
        "Running"
    }

    fn readings(&self) -> &Readings {
        &self.readings
    }

    fn spent_calories(&self) -> f64 {
        let r = &self.readings;
        (RUN_SPEED_MULTIPLIER * self.mean_speed_kmh() - RUN_SPEED_SHIFT) * r.weight_kg / M_IN_KM
            * (r.duration_h * MIN_IN_H)
    }
}

/// Sports walking workout
#[derive(Clone, Debug, PartialEq)]
pub struct SportsWalking {
    pub readings: Readings,
    pub height_cm: f64,
    pub division: WalkingDivision,
}

impl SportsWalking {
    /// Create a walking record using the default (floor) division
    pub fn new(readings: Readings, height_cm: f64) -> Self {
        Self {
            readings,
            height_cm,
            division: WalkingDivision::default(),
        }
    }

    pub fn with_division(mut self, division: WalkingDivision) -> Self {
        self.division = division;
        self
    }
}

impl Training for SportsWalking {
    fn label(&self) -> &'static str {
        "SportsWalking"
    }

    fn readings(&self) -> &Readings {
        &self.readings
    }

    fn spent_calories(&self) -> f64 {
        let r = &self.readings;
        let speed_term = self
            .division
            .apply(self.mean_speed_kmh().powi(2), self.height_cm);

        (WALK_WEIGHT_MULTIPLIER * r.weight_kg
            + speed_term * WALK_SPEED_HEIGHT_MULTIPLIER * r.weight_kg)
            * (r.duration_h * MIN_IN_H)
    }
}

/// Pool swimming workout
#[derive(Clone, Debug, PartialEq)]
pub struct Swimming {
    pub readings: Readings,
    pub pool_length_m: f64,
    pub pool_laps: u32,
}

impl Swimming {
    pub fn new(readings: Readings, pool_length_m: f64, pool_laps: u32) -> Self {
        Self {
            readings,
            pool_length_m,
            pool_laps,
        }
    }
}

impl Training for Swimming {
    fn label(&self) -> &'static str {
        "Swimming"
    }

    fn readings(&self) -> &Readings {
        &self.readings
    }

    fn step_length_m(&self) -> f64 {
        LEN_STROKE_M
    }

    // Speed comes from pool geometry, not from the stroke count
    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * f64::from(self.pool_laps) / M_IN_KM / self.readings.duration_h
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + SWIM_SPEED_SHIFT) * SWIM_WEIGHT_MULTIPLIER * self.readings.weight_kg
    }
}

// ============================================================================
// Workout record
// ============================================================================

/// A workout record of any supported type
#[derive(Clone, Debug, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    fn as_training(&self) -> &dyn Training {
        match self {
            Workout::Running(w) => w,
            Workout::SportsWalking(w) => w,
            Workout::Swimming(w) => w,
        }
    }
}

impl Training for Workout {
    fn label(&self) -> &'static str {
        self.as_training().label()
    }

    fn readings(&self) -> &Readings {
        self.as_training().readings()
    }

    fn spent_calories(&self) -> f64 {
        self.as_training().spent_calories()
    }

    fn step_length_m(&self) -> f64 {
        self.as_training().step_length_m()
    }

    fn distance_km(&self) -> f64 {
        self.as_training().distance_km()
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.as_training().mean_speed_kmh()
    }
}

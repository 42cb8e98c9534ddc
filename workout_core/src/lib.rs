#![forbid(unsafe_code)]

//! Core domain model and metric formulas for workout reports.
//!
//! This crate provides:
//! - Workout records and their distance/speed/calorie formulas
//! - Dispatch from sensor packages to workout records
//! - Report formatting (text and JSON lines)
//! - Package loading (JSON, CSV) and configuration

pub mod error;
pub mod training;
pub mod message;
pub mod package;
pub mod config;
pub mod loader;
pub mod logging;
pub mod driver;

// Re-export commonly used types
pub use error::{Error, Result};
pub use training::{Readings, Running, SportsWalking, Swimming, Training, WalkingDivision, Workout};
pub use message::{InfoMessage, ReportFormat};
pub use package::{demo_packages, read_package, read_package_with, Package, WorkoutType};
pub use config::{Config, FormulaConfig};
pub use loader::load_packages;
pub use driver::{process_packages, run_demo};

//! Batch processing of sensor packages into report lines.

use crate::config::FormulaConfig;
use crate::message::ReportFormat;
use crate::package::{demo_packages, Package};
use crate::training::Training;
use crate::Result;
use std::io::Write;

/// Build a record for each package and write one report line per record
///
/// Lines are written in input order. The first failing package stops the
/// batch; lines already written are left in place. Returns the number of
/// lines written.
pub fn process_packages<W: Write>(
    packages: &[Package],
    formulas: &FormulaConfig,
    format: ReportFormat,
    out: &mut W,
) -> Result<usize> {
    for (index, package) in packages.iter().enumerate() {
        let workout = package.to_workout(formulas).map_err(|e| {
            tracing::error!("Package {} ({}) rejected: {}", index + 1, package.workout_type, e);
            e
        })?;

        let line = workout.show_training_info().render(format)?;
        writeln!(out, "{}", line)?;
    }

    out.flush()?;
    tracing::debug!("Reported {} workouts", packages.len());
    Ok(packages.len())
}

/// Report the demonstration dataset with default formulas as text
pub fn run_demo<W: Write>(out: &mut W) -> Result<usize> {
    process_packages(
        demo_packages(),
        &FormulaConfig::default(),
        ReportFormat::Text,
        out,
    )
}

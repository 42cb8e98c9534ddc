//! Loading sensor packages from files.
//!
//! Two formats are accepted, picked by extension:
//! - `.json`: an array of `{"workout_type": "RUN", "data": [15000, 1, 75]}`
//! - `.csv`: header-less rows `RUN,15000,1,75`; rows may differ in length
//!   and lines starting with `#` are skipped
//!
//! Loading only parses. Codes and value counts are checked when the
//! packages are turned into workout records.

use crate::package::Package;
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Load packages from a JSON or CSV file
pub fn load_packages(path: &Path) -> Result<Vec<Package>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let packages = match extension.as_deref() {
        Some("json") => read_json(BufReader::new(File::open(path)?))?,
        Some("csv") => read_csv(File::open(path)?)?,
        _ => {
            return Err(Error::UnsupportedInput(format!(
                "{} (expected a .json or .csv file)",
                path.display()
            )))
        }
    };

    tracing::info!("Loaded {} packages from {:?}", packages.len(), path);
    Ok(packages)
}

/// Parse a JSON array of packages
pub fn read_json<R: Read>(reader: R) -> Result<Vec<Package>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parse header-less CSV rows of `CODE,value,value,...`
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<Package>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut packages = Vec::new();
    for (row_num, record) in csv_reader.records().enumerate() {
        let record = record?;
        let mut fields = record.iter();

        let workout_type = match fields.next() {
            Some(code) if !code.is_empty() => code,
            _ => {
                tracing::warn!("Skipping empty CSV row {}", row_num + 1);
                continue;
            }
        };

        let data = fields
            .map(|field| {
                field.parse::<f64>().map_err(|e| {
                    Error::UnsupportedInput(format!(
                        "row {}: value {:?} is not a number ({})",
                        row_num + 1,
                        field,
                        e
                    ))
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        packages.push(Package::new(workout_type, data));
    }

    Ok(packages)
}

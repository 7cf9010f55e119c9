//! CSV export of the polarization curve.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Local;

use crate::polarization::OperatingPoint;

/// Write a polarization curve to a timestamped CSV file under `exports/`.
///
/// Creates the exports directory if it doesn't exist. One row per
/// operating point, with a column for each overpotential term and the
/// final voltage (the `OperatingPoint` serde layout).
///
/// Returns the path to the saved CSV file.
pub fn write_curve_csv(points: &[OperatingPoint]) -> Result<PathBuf> {
    let dir = PathBuf::from("exports");
    std::fs::create_dir_all(&dir)?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let filename = format!("polarization_{}.csv", timestamp);
    let path = dir.join(&filename);

    write_curve_csv_to(points, &path)?;
    Ok(path)
}

/// Write a polarization curve to a specific CSV file
pub fn write_curve_csv_to<P: AsRef<Path>>(points: &[OperatingPoint], path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = csv::Writer::from_writer(file);

    for point in points {
        writer.serialize(point)?;
    }
    writer.flush()?;

    log::info!("CSV curve exported: {}", path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Parameters;
    use crate::polarization::PolarizationSolver;

    #[test]
    fn test_csv_has_one_row_per_point_plus_header() {
        let solver = PolarizationSolver::from_parameters(&Parameters::default()).unwrap();
        let points: Vec<OperatingPoint> = [1.0, 1.5, 2.5]
            .iter()
            .map(|&i| solver.evaluate(i).unwrap())
            .collect();

        let dir = std::env::temp_dir().join("sofc_polarization_csv_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("curve.csv");
        write_curve_csv_to(&points, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 4, "Header plus three rows expected");
        assert!(lines[0].contains("current_density_A_per_cm2"));
        assert!(lines[0].contains("voltage_V"));

        std::fs::remove_dir_all(&dir).ok();
    }
}

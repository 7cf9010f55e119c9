//! JSON export of the polarization curve with its parameter set.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Local;
use serde::Serialize;

use crate::config::Parameters;
use crate::polarization::OperatingPoint;

/// Full curve export structure
#[derive(Debug, Clone, Serialize)]
pub struct CurveExport {
    /// Export timestamp
    pub exported_at: String,
    /// Export version for compatibility
    pub version: &'static str,
    /// Parameter set the curve was computed from
    pub parameters: Parameters,
    /// Evaluated operating points
    pub points: Vec<OperatingPoint>,
}

/// Export a polarization curve to a timestamped JSON file under `exports/`.
///
/// Creates the exports directory if it doesn't exist. Filename is
/// auto-generated: `polarization_YYYYMMDD_HHMMSS.json`.
///
/// Returns the path to the saved JSON file.
pub fn export_curve_json(parameters: &Parameters, points: &[OperatingPoint]) -> Result<PathBuf> {
    let dir = PathBuf::from("exports");
    std::fs::create_dir_all(&dir)?;

    let timestamp = Local::now();
    let filename = format!("polarization_{}.json", timestamp.format("%Y%m%d_%H%M%S"));
    let path = dir.join(&filename);

    export_curve_json_to(parameters, points, &path)?;
    Ok(path)
}

/// Export a polarization curve to a specific file
pub fn export_curve_json_to<P: AsRef<Path>>(
    parameters: &Parameters,
    points: &[OperatingPoint],
    path: P,
) -> Result<()> {
    let export = CurveExport {
        exported_at: Local::now().to_rfc3339(),
        version: "1.0.0",
        parameters: parameters.clone(),
        points: points.to_vec(),
    };

    let file = std::fs::File::create(path.as_ref())?;
    serde_json::to_writer_pretty(file, &export)?;

    log::info!("JSON curve exported: {}", path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polarization::PolarizationSolver;

    #[test]
    fn test_json_export_contains_points_and_parameters() {
        let params = Parameters::default();
        let solver = PolarizationSolver::from_parameters(&params).unwrap();
        let points = vec![solver.evaluate(1.0).unwrap()];

        let dir = std::env::temp_dir().join("sofc_polarization_json_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("curve.json");
        export_curve_json_to(&params, &points, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value["points"].as_array().unwrap().len(), 1);
        assert!(value["parameters"]["cell"]["temperature_K"].as_f64().unwrap() > 900.0);

        std::fs::remove_dir_all(&dir).ok();
    }
}

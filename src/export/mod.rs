//! Export functionality for computed polarization curves.
//!
//! Provides CSV and JSON export of evaluated operating points.

mod csv_export;
mod json_export;

pub use csv_export::{write_curve_csv, write_curve_csv_to};
pub use json_export::{export_curve_json, export_curve_json_to, CurveExport};

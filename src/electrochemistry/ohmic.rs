//! Ohmic loss across electrolyte and interconnects.

/// Ohmic overpotential (V): pure linear scaling by the area-specific
/// resistance. No preconditions beyond non-negative inputs and no
/// failure modes.
pub fn ohmic_overpotential(current_density: f64, area_specific_resistance: f64) -> f64 {
    area_specific_resistance * current_density
}

//! Gas state at an electrode surface.
//!
//! Molar concentration follows from the ideal gas law:
//!
//! C = p / (R·T)
//!
//! with p in Pa, T in K and C in mol/m3. Both feed gases (oxygen at
//! the cathode, methane at the anode) are treated as ideal at SOFC
//! operating temperatures.

use serde::Serialize;

use super::GAS_CONSTANT_J_PER_MOL_K;

/// Gas conditions at one electrode, with the derived molar concentration.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GasState {
    /// Partial pressure of the reactant (Pa)
    pub partial_pressure_Pa: f64,
    /// Molar concentration (mol/m3), derived via the ideal gas law
    pub concentration_mol_per_m3: f64,
}

impl GasState {
    /// Derive the gas state from partial pressure and temperature.
    ///
    /// Caller guarantees T > 0 and p > 0; both are enforced by
    /// `Parameters::validate()` before any state is derived, so a
    /// division by zero here is a misconfiguration, not a recoverable
    /// error.
    pub fn from_partial_pressure(partial_pressure_Pa: f64, temperature_K: f64) -> Self {
        let concentration_mol_per_m3 =
            partial_pressure_Pa / (GAS_CONSTANT_J_PER_MOL_K * temperature_K);
        Self {
            partial_pressure_Pa,
            concentration_mol_per_m3,
        }
    }
}

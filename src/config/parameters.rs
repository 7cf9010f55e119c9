//! Parameter structures with citation metadata.
//!
//! Defaults are the documented operating set for a methane/oxygen SOFC
//! button cell at 700 degC. Every parameter is validated once at setup;
//! a non-physical value is a fatal [`ConfigurationError`], never a
//! per-point failure.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigurationError;

/// Top-level parameters container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameters {
    /// Whole-cell conditions (temperature, electron count, ASR)
    pub cell: CellParameters,
    /// Oxygen-reduction electrode
    pub cathode: ElectrodeParameters,
    /// Methane-oxidation electrode
    pub anode: ElectrodeParameters,
}

impl Parameters {
    /// Load parameters from JSON files, or use defaults if files don't exist
    pub fn load_or_default() -> Self {
        Self::load_from_dir("data/parameters")
    }

    /// Load parameters from a specific directory
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        let cell = CellParameters::load_or(dir.join("cell.json"), CellParameters::default());
        let cathode =
            ElectrodeParameters::load_or(dir.join("cathode.json"), ElectrodeParameters::cathode());
        let anode =
            ElectrodeParameters::load_or(dir.join("anode.json"), ElectrodeParameters::anode());

        Self { cell, cathode, anode }
    }

    /// Check every fixed parameter for physical validity.
    ///
    /// Run once before any operating point is evaluated; the first
    /// offending parameter aborts setup.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.cell.validate()?;
        self.cathode.validate("cathode")?;
        self.anode.validate("anode")?;
        Ok(())
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            cell: CellParameters::default(),
            cathode: ElectrodeParameters::cathode(),
            anode: ElectrodeParameters::anode(),
        }
    }
}

/// Whole-cell operating conditions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellParameters {
    /// Operating temperature (K)
    /// Reference: 700 degC, intermediate-temperature SOFC regime
    /// Source: Aguiar et al., J Power Sources 2004
    pub temperature_K: f64,

    /// Electrons transferred per fuel molecule
    /// CH4 + 2 O2 -> CO2 + 2 H2O is an 8-electron oxidation overall;
    /// the rate-limiting oxide-ion step transfers 4
    pub electrons_per_fuel_molecule: f64,

    /// Charge-transfer coefficient, shared by both electrodes
    /// Physical convention: alpha in (0, 1], symmetric barrier at 0.5
    /// Source: Noren & Hoffman, J Power Sources 2005
    pub transfer_coefficient: f64,

    /// Area-specific resistance (ohm cm2)
    /// Electrolyte plus contact resistance of a thin-electrolyte cell
    /// Source: Steele & Heinzel, Nature 2001 (target ASR ~0.1)
    pub area_specific_resistance: f64,
}

impl CellParameters {
    /// Load from JSON file or return the given fallback
    pub fn load_or<P: AsRef<Path>>(path: P, fallback: Self) -> Self {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(params) => {
                    log::info!("Loaded cell parameters from {:?}", path.as_ref());
                    params
                }
                Err(e) => {
                    log::warn!("Failed to parse cell parameters: {}, using defaults", e);
                    fallback
                }
            },
            Err(_) => {
                log::info!("Cell parameters file not found, using defaults");
                fallback
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        require_positive("temperature_K", self.temperature_K)?;
        require_positive("electrons_per_fuel_molecule", self.electrons_per_fuel_molecule)?;
        require_positive("area_specific_resistance", self.area_specific_resistance)?;

        let alpha = self.transfer_coefficient;
        if !alpha.is_finite() || alpha <= 0.0 || alpha > 1.0 {
            return Err(ConfigurationError::TransferCoefficientOutOfRange { value: alpha });
        }
        Ok(())
    }
}

impl Default for CellParameters {
    fn default() -> Self {
        Self {
            // 700 degC
            temperature_K: 973.15,

            // Oxide-ion step of methane oxidation
            electrons_per_fuel_molecule: 4.0,

            // Symmetric charge-transfer barrier
            transfer_coefficient: 0.5,

            // Steele & Heinzel 2001
            area_specific_resistance: 0.1,
        }
    }
}

/// Per-electrode kinetic, feed, and transport parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElectrodeParameters {
    /// Partial pressure of the reactant at the electrode surface (Pa)
    pub partial_pressure_Pa: f64,

    /// Pre-exponential factor of the exchange-current expression
    /// Calibrated against the documented polarization points; absorbs
    /// the A/cm2 vs A/m2 scale convention of the source data
    pub pre_exponential: f64,

    /// Activation temperature E (K): activation energy divided by R
    pub activation_temperature_K: f64,

    /// Effective diffusivity through the porous electrode (m2/s)
    /// Source: Chan, Khaleel & Xia, J Power Sources 2001 (typical
    /// effective values for SOFC electrodes)
    pub effective_diffusivity_m2_per_s: f64,

    /// Diffusion-layer thickness (m)
    pub diffusion_layer_thickness_m: f64,
}

impl ElectrodeParameters {
    /// Default cathode: oxygen reduction on an LSM/YSZ composite
    pub fn cathode() -> Self {
        Self {
            // Pure oxygen feed at 1 atm
            partial_pressure_Pa: 101325.0,

            // Calibrated pair; E_c/R ~ 14000 K is ~116 kJ/mol
            pre_exponential: 6.0e8,
            activation_temperature_K: 14000.0,

            // Thin cathode functional layer
            effective_diffusivity_m2_per_s: 3.66e-7,
            diffusion_layer_thickness_m: 10e-6,
        }
    }

    /// Default anode: methane oxidation on a Ni/YSZ cermet
    pub fn anode() -> Self {
        Self {
            // Methane feed at 1 atm
            partial_pressure_Pa: 101325.0,

            // Calibrated pair; E_a/R ~ 12000 K is ~99.8 kJ/mol
            pre_exponential: 1.3904e8,
            activation_temperature_K: 12000.0,

            // Thick anode support
            effective_diffusivity_m2_per_s: 9.66e-7,
            diffusion_layer_thickness_m: 200e-6,
        }
    }

    /// Load from JSON file or return the given fallback
    pub fn load_or<P: AsRef<Path>>(path: P, fallback: Self) -> Self {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(params) => {
                    log::info!("Loaded electrode parameters from {:?}", path.as_ref());
                    params
                }
                Err(e) => {
                    log::warn!("Failed to parse electrode parameters: {}, using defaults", e);
                    fallback
                }
            },
            Err(_) => {
                log::info!("Electrode parameters file {:?} not found, using defaults", path.as_ref());
                fallback
            }
        }
    }

    fn validate(&self, electrode: &'static str) -> Result<(), ConfigurationError> {
        // Field names are reported with their electrode prefix so the
        // failure message identifies which side is misconfigured.
        let checks: [(&'static str, f64); 5] = match electrode {
            "cathode" => [
                ("cathode partial_pressure_Pa", self.partial_pressure_Pa),
                ("cathode pre_exponential", self.pre_exponential),
                ("cathode activation_temperature_K", self.activation_temperature_K),
                ("cathode effective_diffusivity_m2_per_s", self.effective_diffusivity_m2_per_s),
                ("cathode diffusion_layer_thickness_m", self.diffusion_layer_thickness_m),
            ],
            _ => [
                ("anode partial_pressure_Pa", self.partial_pressure_Pa),
                ("anode pre_exponential", self.pre_exponential),
                ("anode activation_temperature_K", self.activation_temperature_K),
                ("anode effective_diffusivity_m2_per_s", self.effective_diffusivity_m2_per_s),
                ("anode diffusion_layer_thickness_m", self.diffusion_layer_thickness_m),
            ],
        };
        for (name, value) in checks {
            require_positive(name, value)?;
        }
        Ok(())
    }
}

fn require_positive(name: &'static str, value: f64) -> Result<(), ConfigurationError> {
    if !value.is_finite() {
        return Err(ConfigurationError::NonFinite { name, value });
    }
    if value <= 0.0 {
        return Err(ConfigurationError::NonPositive { name, value });
    }
    Ok(())
}

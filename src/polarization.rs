//! Operating-point evaluator for the cell polarization curve.
//!
//! For each requested current density the solver computes five loss
//! terms (Tafel activation at each electrode, Fick-limited diffusion at
//! each electrode, ohmic) and subtracts their sum from the Nernst
//! open-circuit voltage:
//!
//! V(i) = E_nernst - (η_act,c + η_act,a + η_diff,c + η_diff,a + η_ohm)
//!
//! All derived quantities (gas concentrations, exchange currents,
//! limiting currents) are computed once at construction and shared
//! immutably; each operating point is evaluated independently, so a
//! domain error in one requested current density never affects the
//! others.

use serde::Serialize;

use crate::config::Parameters;
use crate::electrochemistry::{
    activation_overpotential, diffusion_overpotential, exchange_current_density,
    limiting_current_density, ohmic_overpotential, GasState, NERNST_VOLTAGE_V,
};
use crate::error::{DomainError, Electrode, ModelError};

/// One evaluated point of the polarization curve.
///
/// Produced fresh per requested current density; shares no state with
/// other points.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OperatingPoint {
    /// Requested current density (A/cm2)
    pub current_density_A_per_cm2: f64,
    /// Cathode activation (Tafel) overpotential (V)
    pub activation_cathode_V: f64,
    /// Anode activation (Tafel) overpotential (V)
    pub activation_anode_V: f64,
    /// Cathode diffusion overpotential (V)
    pub diffusion_cathode_V: f64,
    /// Anode diffusion overpotential (V)
    pub diffusion_anode_V: f64,
    /// Ohmic overpotential (V)
    pub ohmic_V: f64,
    /// Operating voltage (V): Nernst voltage minus all losses
    pub voltage_V: f64,
}

impl OperatingPoint {
    /// Sum of all five loss terms (V)
    pub fn total_overpotential_V(&self) -> f64 {
        self.activation_cathode_V
            + self.activation_anode_V
            + self.diffusion_cathode_V
            + self.diffusion_anode_V
            + self.ohmic_V
    }
}

/// Polarization solver holding the immutable derived state of one cell.
#[derive(Debug, Clone)]
pub struct PolarizationSolver {
    /// Validated parameter set
    pub params: Parameters,
    /// Oxygen state at the cathode surface
    pub cathode_gas: GasState,
    /// Methane state at the anode surface
    pub anode_gas: GasState,
    /// Cathode exchange current density (A/m2)
    pub i0_cathode_A_per_m2: f64,
    /// Anode exchange current density (A/m2)
    pub i0_anode_A_per_m2: f64,
    /// Cathode limiting current density (A/m2)
    pub i_lim_cathode_A_per_m2: f64,
    /// Anode limiting current density (A/m2)
    pub i_lim_anode_A_per_m2: f64,
}

impl PolarizationSolver {
    /// Validate the parameter set and derive the per-electrode state.
    ///
    /// Fails with a [`crate::ConfigurationError`] on a non-physical
    /// fixed parameter, or a [`DomainError`] if a derived gas
    /// concentration cannot support an exchange current. Either way,
    /// no operating point is evaluated on a broken setup.
    pub fn from_parameters(params: &Parameters) -> Result<Self, ModelError> {
        params.validate()?;

        let temperature_K = params.cell.temperature_K;
        let cathode_gas =
            GasState::from_partial_pressure(params.cathode.partial_pressure_Pa, temperature_K);
        let anode_gas =
            GasState::from_partial_pressure(params.anode.partial_pressure_Pa, temperature_K);

        let i0_cathode_A_per_m2 = exchange_current_density(
            Electrode::Cathode,
            params.cathode.pre_exponential,
            params.cathode.activation_temperature_K,
            temperature_K,
            cathode_gas.concentration_mol_per_m3,
        )?;
        let i0_anode_A_per_m2 = exchange_current_density(
            Electrode::Anode,
            params.anode.pre_exponential,
            params.anode.activation_temperature_K,
            temperature_K,
            anode_gas.concentration_mol_per_m3,
        )?;

        let i_lim_cathode_A_per_m2 = limiting_current_density(
            params.cathode.effective_diffusivity_m2_per_s,
            cathode_gas.concentration_mol_per_m3,
            params.cathode.diffusion_layer_thickness_m,
        );
        let i_lim_anode_A_per_m2 = limiting_current_density(
            params.anode.effective_diffusivity_m2_per_s,
            anode_gas.concentration_mol_per_m3,
            params.anode.diffusion_layer_thickness_m,
        );

        Ok(Self {
            params: params.clone(),
            cathode_gas,
            anode_gas,
            i0_cathode_A_per_m2,
            i0_anode_A_per_m2,
            i_lim_cathode_A_per_m2,
            i_lim_anode_A_per_m2,
        })
    }

    /// Evaluate one operating point.
    ///
    /// O(1) scalar arithmetic; reads only the immutable derived state.
    pub fn evaluate(&self, current_density_A_per_cm2: f64) -> Result<OperatingPoint, DomainError> {
        let i = current_density_A_per_cm2;
        if !(i > 0.0) {
            return Err(DomainError::NonPositiveCurrentDensity {
                current_density_A_per_cm2: i,
            });
        }

        let cell = &self.params.cell;

        let activation_cathode_V = self.activation(Electrode::Cathode, i)?;
        let activation_anode_V = self.activation(Electrode::Anode, i)?;

        let diffusion_cathode_V = diffusion_overpotential(
            Electrode::Cathode,
            i,
            self.i_lim_cathode_A_per_m2,
            cell.electrons_per_fuel_molecule,
            cell.temperature_K,
        )?;
        let diffusion_anode_V = diffusion_overpotential(
            Electrode::Anode,
            i,
            self.i_lim_anode_A_per_m2,
            cell.electrons_per_fuel_molecule,
            cell.temperature_K,
        )?;

        let ohmic_V = ohmic_overpotential(i, cell.area_specific_resistance);

        let total = activation_cathode_V
            + activation_anode_V
            + diffusion_cathode_V
            + diffusion_anode_V
            + ohmic_V;

        Ok(OperatingPoint {
            current_density_A_per_cm2: i,
            activation_cathode_V,
            activation_anode_V,
            diffusion_cathode_V,
            diffusion_anode_V,
            ohmic_V,
            voltage_V: NERNST_VOLTAGE_V - total,
        })
    }

    /// Evaluate a sequence of current densities, order-preserving.
    ///
    /// Streaming semantics: each point is evaluated independently and a
    /// domain error for one input never suppresses or corrupts the
    /// results for the others.
    pub fn sweep(&self, current_densities_A_per_cm2: &[f64]) -> Vec<Result<OperatingPoint, DomainError>> {
        current_densities_A_per_cm2
            .iter()
            .map(|&i| self.evaluate(i))
            .collect()
    }

    fn activation(&self, electrode: Electrode, i: f64) -> Result<f64, DomainError> {
        let i0 = match electrode {
            Electrode::Cathode => self.i0_cathode_A_per_m2,
            Electrode::Anode => self.i0_anode_A_per_m2,
        };
        if !(i0 > 0.0) {
            return Err(DomainError::NonPositiveExchangeCurrent {
                electrode,
                i0_A_per_m2: i0,
                current_density_A_per_cm2: i,
            });
        }
        Ok(activation_overpotential(
            i,
            i0,
            self.params.cell.transfer_coefficient,
            self.params.cell.temperature_K,
        ))
    }

    /// Print the derived state of the cell
    pub fn print_summary(&self) {
        println!("=== SOFC Polarization Model ===");
        println!();
        println!("Cell:");
        println!("  Temperature:     {:.2} K", self.params.cell.temperature_K);
        println!("  Nernst voltage:  {:.3} V", NERNST_VOLTAGE_V);
        println!("  ASR:             {:.3} ohm cm2", self.params.cell.area_specific_resistance);
        println!();
        println!("Cathode (O2):");
        println!("  Concentration:   {:.4} mol/m3", self.cathode_gas.concentration_mol_per_m3);
        println!("  Exchange i0:     {:.2} A/m2", self.i0_cathode_A_per_m2);
        println!("  Limiting i:      {:.1} A/m2", self.i_lim_cathode_A_per_m2);
        println!();
        println!("Anode (CH4):");
        println!("  Concentration:   {:.4} mol/m3", self.anode_gas.concentration_mol_per_m3);
        println!("  Exchange i0:     {:.2} A/m2", self.i0_anode_A_per_m2);
        println!("  Limiting i:      {:.1} A/m2", self.i_lim_anode_A_per_m2);
    }
}

//! SOFC Polarization - steady-state voltage model for a methane/oxygen
//! solid-oxide fuel cell.
//!
//! This library evaluates the polarization curve of a solid-oxide fuel
//! cell from closed-form overpotential expressions: Tafel activation
//! losses at both electrodes, Fick's-law-limited diffusion losses at
//! both electrodes, and an ohmic loss, all subtracted from the Nernst
//! open-circuit voltage.

// Allow non-snake-case for unit suffixes in field names (K, Pa, A_per_m2, etc.)
// This follows the project convention of including units in names.
#![allow(non_snake_case)]

pub mod config;
pub mod electrochemistry;
pub mod error;
pub mod export;
pub mod polarization;

pub use config::Parameters;
pub use electrochemistry::{
    GasState, FARADAY_C_PER_MOL, GAS_CONSTANT_J_PER_MOL_K, NERNST_VOLTAGE_V,
};
pub use error::{ConfigurationError, DomainError, ModelError};
pub use polarization::{OperatingPoint, PolarizationSolver};

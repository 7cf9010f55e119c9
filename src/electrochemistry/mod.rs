//! Pure scalar electrochemistry.
//!
//! Every function here is stateless: given the same constants it
//! returns the same value bit-for-bit. The solver in
//! [`crate::polarization`] wires these together per operating point.

mod gas;
mod kinetics;
mod ohmic;
mod transport;

pub use gas::GasState;
pub use kinetics::{activation_overpotential, exchange_current_density};
pub use ohmic::ohmic_overpotential;
pub use transport::{diffusion_overpotential, limiting_current_density};

/// Universal gas constant (J/(mol·K))
pub const GAS_CONSTANT_J_PER_MOL_K: f64 = 8.3145;

/// Faraday constant (C/mol)
pub const FARADAY_C_PER_MOL: f64 = 96485.0;

/// Nernst open-circuit voltage for the methane/oxygen couple (V)
///
/// Fixed thermodynamic maximum; all overpotentials subtract from it.
pub const NERNST_VOLTAGE_V: f64 = 1.229;

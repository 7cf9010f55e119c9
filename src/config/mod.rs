//! Configuration module for loading model parameters.
//!
//! All physical parameters include citations to their source values.

mod parameters;

pub use parameters::{CellParameters, ElectrodeParameters, Parameters};

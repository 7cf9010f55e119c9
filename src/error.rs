//! Error taxonomy for the polarization model.
//!
//! Two distinct failure classes exist:
//! - [`ConfigurationError`]: a fixed physical parameter is non-physical.
//!   Detected once by `Parameters::validate()` before any operating
//!   point is evaluated; fatal.
//! - [`DomainError`]: a logarithm or division would receive a
//!   non-positive argument during evaluation. Raised per offending
//!   operating point, carrying the value that triggered it; never
//!   allowed to degrade into NaN output.

use thiserror::Error;

/// Which electrode a derived quantity belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Electrode {
    /// Oxygen-reduction side
    Cathode,
    /// Methane-oxidation side
    Anode,
}

impl std::fmt::Display for Electrode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Electrode::Cathode => write!(f, "cathode"),
            Electrode::Anode => write!(f, "anode"),
        }
    }
}

/// A non-physical fixed parameter detected at setup.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigurationError {
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("transfer coefficient must lie in (0, 1], got {value}")]
    TransferCoefficientOutOfRange { value: f64 },

    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
}

/// An arithmetic domain violation for one operating point.
///
/// Every variant names the failing term; variants raised while
/// evaluating a requested operating point carry that current density
/// so the caller can report which input failed.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DomainError {
    #[error(
        "current density {current_density_A_per_cm2} A/cm2 is not positive; \
         activation overpotential (Tafel logarithm) is undefined"
    )]
    NonPositiveCurrentDensity { current_density_A_per_cm2: f64 },

    #[error(
        "exchange current density {i0_A_per_m2} A/m2 at the {electrode} is not \
         positive; activation overpotential is undefined for current density \
         {current_density_A_per_cm2} A/cm2"
    )]
    NonPositiveExchangeCurrent {
        electrode: Electrode,
        i0_A_per_m2: f64,
        current_density_A_per_cm2: f64,
    },

    #[error(
        "gas concentration {concentration_mol_per_m3} mol/m3 at the {electrode} \
         is not positive; exchange current density is undefined"
    )]
    NonPositiveConcentration {
        electrode: Electrode,
        concentration_mol_per_m3: f64,
    },

    #[error(
        "limiting current density {i_lim_A_per_m2} A/m2 at the {electrode} is \
         not positive; diffusion overpotential is undefined for current density \
         {current_density_A_per_cm2} A/cm2"
    )]
    NonPositiveLimitingCurrent {
        electrode: Electrode,
        i_lim_A_per_m2: f64,
        current_density_A_per_cm2: f64,
    },
}

/// Umbrella error for solver construction, which can fail either way.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModelError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_names_offending_current() {
        let err = DomainError::NonPositiveCurrentDensity {
            current_density_A_per_cm2: -0.5,
        };
        let msg = err.to_string();
        assert!(msg.contains("-0.5"), "message should carry the value: {}", msg);
        assert!(msg.contains("activation"), "message should name the term: {}", msg);
    }

    #[test]
    fn test_configuration_error_message() {
        let err = ConfigurationError::NonPositive {
            name: "temperature_K",
            value: 0.0,
        };
        assert!(err.to_string().contains("temperature_K"));
    }

    #[test]
    fn test_electrode_display() {
        assert_eq!(Electrode::Cathode.to_string(), "cathode");
        assert_eq!(Electrode::Anode.to_string(), "anode");
    }
}

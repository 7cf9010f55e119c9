//! Electrode kinetics: exchange current density and Tafel activation loss.
//!
//! Exchange current density follows an Arrhenius-type expression in
//! temperature and reactant concentration:
//!
//! i0 = A · exp(-E/T) · C
//!
//! where A is a pre-exponential calibration constant, E an activation
//! temperature (activation energy divided by R, in K) and C the molar
//! reactant concentration at the electrode.
//!
//! Activation overpotential uses the Tafel form:
//!
//! η_act = (R·T)/(α·F) · ln(i / i0)
//!
//! Unit convention: requested current densities are A/cm2 while derived
//! exchange currents are A/m2; the logarithm compares raw magnitudes
//! and the calibration constants absorb the scale mismatch. The model
//! is calibrated against its documented polarization points under this
//! convention, so changing it requires refitting A.
//!
//! Reference: Noren & Hoffman, J Power Sources 2005 (Tafel/Butler-Volmer
//! forms for SOFC electrodes)

use crate::error::{DomainError, Electrode};

use super::{FARADAY_C_PER_MOL, GAS_CONSTANT_J_PER_MOL_K};

/// Derive the exchange current density for one electrode (A/m2).
///
/// i0 = A · exp(-E/T) · C. Strictly positive for physically valid
/// inputs; a zero or negative concentration is rejected because every
/// dependent Tafel logarithm would be undefined.
pub fn exchange_current_density(
    electrode: Electrode,
    pre_exponential: f64,
    activation_temperature_K: f64,
    temperature_K: f64,
    concentration_mol_per_m3: f64,
) -> Result<f64, DomainError> {
    if !(concentration_mol_per_m3 > 0.0) {
        return Err(DomainError::NonPositiveConcentration {
            electrode,
            concentration_mol_per_m3,
        });
    }

    let i0 = pre_exponential
        * (-activation_temperature_K / temperature_K).exp()
        * concentration_mol_per_m3;
    Ok(i0)
}

/// Tafel activation overpotential (V).
///
/// η = (R·T)/(α·F) · ln(i / i0)
///
/// Preconditions (enforced by the solver, not here): i > 0 and i0 > 0.
/// α ∈ (0, 1] is a contract on the caller; it is fixed at 0.5 in the
/// documented parameter set. For i < i0 the result is negative, which
/// this model's calibration deliberately exploits; the function does
/// not reject it.
pub fn activation_overpotential(
    current_density: f64,
    exchange_current_density: f64,
    transfer_coefficient: f64,
    temperature_K: f64,
) -> f64 {
    let tafel_slope_V = GAS_CONSTANT_J_PER_MOL_K * temperature_K
        / (transfer_coefficient * FARADAY_C_PER_MOL);
    tafel_slope_V * (current_density / exchange_current_density).ln()
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: f64 = 973.15;

    #[test]
    fn test_exchange_current_is_positive() {
        let i0 = exchange_current_density(Electrode::Cathode, 6.0e8, 14000.0, T, 12.522778)
            .expect("valid inputs");
        assert!(i0 > 0.0, "Exchange current must be strictly positive, got {}", i0);
    }

    #[test]
    fn test_exchange_current_documented_cathode_value() {
        // A_c = 6.0e8, E_c = 14000 K, C = 12.522778 mol/m3 -> ~4245.94 A/m2
        let i0 = exchange_current_density(Electrode::Cathode, 6.0e8, 14000.0, T, 12.522778178060724)
            .expect("valid inputs");
        assert!(
            (i0 - 4245.938112646655).abs() / 4245.938112646655 < 1e-12,
            "Expected ~4245.94 A/m2, got {}",
            i0
        );
    }

    #[test]
    fn test_exchange_current_rejects_non_positive_concentration() {
        for c in [0.0, -1.0, f64::NAN] {
            let result = exchange_current_density(Electrode::Anode, 1.0e8, 12000.0, T, c);
            assert!(
                matches!(result, Err(DomainError::NonPositiveConcentration { .. })),
                "Concentration {} must be rejected",
                c
            );
        }
    }

    #[test]
    fn test_activation_zero_at_exchange_current() {
        // ln(1) = 0 exactly
        let eta = activation_overpotential(250.0, 250.0, 0.5, T);
        assert_eq!(eta, 0.0, "At i = i0 the Tafel term must vanish exactly");
    }

    #[test]
    fn test_activation_strictly_increasing_in_current() {
        let i0 = 100.0;
        let mut prev = activation_overpotential(i0, i0, 0.5, T);
        for k in 1..50 {
            let i = i0 * (1.0 + k as f64 * 0.5);
            let eta = activation_overpotential(i, i0, 0.5, T);
            assert!(
                eta > prev,
                "Activation overpotential must be strictly increasing in i: {} <= {} at i={}",
                eta,
                prev,
                i
            );
            prev = eta;
        }
    }

    #[test]
    fn test_activation_strictly_decreasing_in_alpha() {
        // Fixed i > i0, larger alpha means a shallower Tafel slope
        let (i, i0) = (500.0, 100.0);
        let mut prev = activation_overpotential(i, i0, 0.1, T);
        for alpha in [0.25, 0.5, 0.75, 1.0] {
            let eta = activation_overpotential(i, i0, alpha, T);
            assert!(
                eta < prev,
                "Activation overpotential must decrease with alpha: {} >= {} at alpha={}",
                eta,
                prev,
                alpha
            );
            prev = eta;
        }
    }

    #[test]
    fn test_activation_negative_below_exchange_current() {
        let eta = activation_overpotential(1.0, 4245.94, 0.5, T);
        assert!(eta < 0.0, "For i < i0 the Tafel term is negative, got {}", eta);
    }
}

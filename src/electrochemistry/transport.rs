//! Mass-transport (diffusion) losses.
//!
//! The limiting current density implied by Fick's law across a
//! diffusion layer of thickness δ is
//!
//! i_lim = F·D·C / δ
//!
//! and the diffusion overpotential uses the additive form
//!
//! η_diff = (R·T)/(n·F) · ln(1 + i/i_lim)
//!
//! Note the `1 + i/i_lim` argument: unlike the common depletion form
//! `1 - i/i_lim`, this expression has no singularity at the limiting
//! current. It bounds the loss instead of blowing up. That is a
//! modeling choice of this cell model and must be preserved exactly;
//! the documented polarization points depend on it.

use crate::error::{DomainError, Electrode};

use super::{FARADAY_C_PER_MOL, GAS_CONSTANT_J_PER_MOL_K};

/// Limiting current density for one electrode (A/m2).
///
/// i_lim = F·D·C/δ. Positive whenever D, C and δ are positive, which
/// configuration validation guarantees.
pub fn limiting_current_density(
    effective_diffusivity_m2_per_s: f64,
    concentration_mol_per_m3: f64,
    diffusion_layer_thickness_m: f64,
) -> f64 {
    FARADAY_C_PER_MOL * effective_diffusivity_m2_per_s * concentration_mol_per_m3
        / diffusion_layer_thickness_m
}

/// Diffusion overpotential in the additive Fick-limited form (V).
///
/// Returns a `DomainError` naming the electrode and the requested
/// current density if the limiting current is not positive; zero net
/// current gives exactly zero loss.
pub fn diffusion_overpotential(
    electrode: Electrode,
    current_density: f64,
    i_lim_A_per_m2: f64,
    electrons_per_fuel_molecule: f64,
    temperature_K: f64,
) -> Result<f64, DomainError> {
    if !(i_lim_A_per_m2 > 0.0) {
        return Err(DomainError::NonPositiveLimitingCurrent {
            electrode,
            i_lim_A_per_m2,
            current_density_A_per_cm2: current_density,
        });
    }

    let nernst_slope_V = GAS_CONSTANT_J_PER_MOL_K * temperature_K
        / (electrons_per_fuel_molecule * FARADAY_C_PER_MOL);
    Ok(nernst_slope_V * (1.0 + current_density / i_lim_A_per_m2).ln())
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: f64 = 973.15;
    const N: f64 = 4.0;

    #[test]
    fn test_limiting_current_documented_cathode_value() {
        // F * 3.66e-7 * 12.522778 / 10e-6 = ~44222.3 A/m2
        let i_lim = limiting_current_density(3.66e-7, 12.522778178060724, 10e-6);
        assert!(
            (i_lim - 44222.32524187292).abs() / 44222.32524187292 < 1e-12,
            "Expected ~44222.3 A/m2, got {}",
            i_lim
        );
    }

    #[test]
    fn test_diffusion_zero_at_zero_current() {
        let eta = diffusion_overpotential(Electrode::Cathode, 0.0, 44222.3, N, T)
            .expect("valid limiting current");
        assert_eq!(eta, 0.0, "ln(1) = 0: no diffusion loss at zero current");
    }

    #[test]
    fn test_diffusion_strictly_increasing_and_non_negative() {
        let i_lim = 5835.9;
        let mut prev = -1.0;
        for k in 0..100 {
            let i = k as f64 * 0.5;
            let eta = diffusion_overpotential(Electrode::Anode, i, i_lim, N, T)
                .expect("valid limiting current");
            assert!(eta >= 0.0, "Diffusion loss must be non-negative, got {}", eta);
            assert!(
                eta > prev,
                "Diffusion loss must be strictly increasing: {} <= {} at i={}",
                eta,
                prev,
                i
            );
            prev = eta;
        }
    }

    #[test]
    fn test_diffusion_finite_at_limiting_current() {
        // The additive form has no singularity at i = i_lim: ln(2) there.
        let i_lim = 5835.9;
        let eta = diffusion_overpotential(Electrode::Anode, i_lim, i_lim, N, T)
            .expect("valid limiting current");
        let expected = GAS_CONSTANT_J_PER_MOL_K * T / (N * FARADAY_C_PER_MOL) * 2.0_f64.ln();
        assert!(
            (eta - expected).abs() < 1e-12,
            "At i = i_lim the loss is (RT/nF)·ln 2, got {}",
            eta
        );
        assert!(eta.is_finite());
    }

    #[test]
    fn test_diffusion_rejects_non_positive_limiting_current() {
        for i_lim in [0.0, -10.0, f64::NAN] {
            let result = diffusion_overpotential(Electrode::Cathode, 1.0, i_lim, N, T);
            assert!(
                matches!(result, Err(DomainError::NonPositiveLimitingCurrent { .. })),
                "Limiting current {} must be rejected",
                i_lim
            );
        }
    }
}

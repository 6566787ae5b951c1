//! Reaction kinetics of the reversible butane isomerization.
//!
//! Pure functions of the local state; reactor parameters travel as an explicit
//! context argument so the stepper adapter stays free of captured state.

use crate::ReactorsIVP::IsomReactorIVP::{ReactorError, ReactorParameters};

/// Arrhenius-type rate constant, k = 31.1·exp(7906·(T - 360)/(360·T)).
///
/// The exponent vanishes at T = 360 K, so k(360) = 31.1 exactly.
pub fn rate_constant(temperature: f64) -> f64 {
    31.1 * (7906.0 * (temperature - 360.0) / (360.0 * temperature)).exp()
}

/// Equilibrium constant, K_eq = exp(-830.3·(T - 333)/(333·T)); K_eq(333) = 1 exactly.
pub fn equilibrium_constant(temperature: f64) -> f64 {
    (-830.3 * (temperature - 333.0) / (333.0 * temperature)).exp()
}

/// Net isomerization rate, rate = -k·C0·(1 - (1 + 1/K_eq)·C) (mol/(L·s)).
///
/// Both k and K_eq divide by T, and the rate divides by K_eq; a non-physical state
/// (T ≤ 0, non-finite inputs) or a non-finite result is rejected as a
/// `RateEvaluation` error instead of letting NaN/inf reach the stepper.
pub fn reaction_rate(
    params: &ReactorParameters,
    concentration: f64,
    temperature: f64,
) -> Result<f64, ReactorError> {
    if !temperature.is_finite() || temperature <= 0.0 || !concentration.is_finite() {
        return Err(ReactorError::RateEvaluation {
            concentration,
            temperature,
        });
    }
    let k = rate_constant(temperature);
    let k_eq = equilibrium_constant(temperature);
    let rate = -k * params.C0 * (1.0 - (1.0 + 1.0 / k_eq) * concentration);
    if !rate.is_finite() {
        return Err(ReactorError::RateEvaluation {
            concentration,
            temperature,
        });
    }
    Ok(rate)
}

/// Mole balance: dC/dx = -rate/v0
pub fn concentration_derivative(rate: f64, params: &ReactorParameters) -> f64 {
    -rate / params.v0
}

/// Energy balance: dT/dx = (rate·dH - U·(T - Tc)) / (v0·Cp)
pub fn temperature_derivative(rate: f64, temperature: f64, params: &ReactorParameters) -> f64 {
    (rate * params.dH - params.U * (temperature - params.Tc)) / (params.v0 * params.Cp)
}

/// Two-component right-hand side (dC/dx, dT/dx) of the reactor ODE system.
pub fn reactor_rhs(
    params: &ReactorParameters,
    concentration: f64,
    temperature: f64,
) -> Result<(f64, f64), ReactorError> {
    let rate = reaction_rate(params, concentration, temperature)?;
    let d_conc = concentration_derivative(rate, params);
    let d_temp = temperature_derivative(rate, temperature, params);
    Ok((d_conc, d_temp))
}

/////////////////////////////////////////TESTS/////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_params() -> ReactorParameters {
        ReactorParameters::with_coolant_temp(300.0)
    }

    #[test]
    fn rate_constant_at_360_is_preexponential() {
        // the exponent term vanishes exactly
        assert_eq!(rate_constant(360.0), 31.1);
    }

    #[test]
    fn equilibrium_constant_at_333_is_unity() {
        assert_eq!(equilibrium_constant(333.0), 1.0);
    }

    #[test]
    fn rate_is_negative_at_zero_conversion() {
        let params = test_params();
        let rate = reaction_rate(&params, 0.0, 305.0).unwrap();
        assert_relative_eq!(rate, -rate_constant(305.0) * params.C0, max_relative = 1e-12);
        assert!(rate < 0.0);
    }

    #[test]
    fn rate_rejects_non_physical_temperature() {
        let params = test_params();
        assert!(matches!(
            reaction_rate(&params, 0.0, 0.0),
            Err(ReactorError::RateEvaluation { .. })
        ));
        assert!(matches!(
            reaction_rate(&params, 0.0, -25.0),
            Err(ReactorError::RateEvaluation { .. })
        ));
        assert!(matches!(
            reaction_rate(&params, 0.0, f64::NAN),
            Err(ReactorError::RateEvaluation { .. })
        ));
    }

    #[test]
    fn rate_rejects_non_finite_concentration() {
        let params = test_params();
        assert!(matches!(
            reaction_rate(&params, f64::INFINITY, 305.0),
            Err(ReactorError::RateEvaluation { .. })
        ));
    }

    #[test]
    fn derivative_functions_match_balances() {
        let params = test_params();
        let rate = -2.0;
        assert_relative_eq!(
            concentration_derivative(rate, &params),
            2.0 / 16.3,
            max_relative = 1e-12
        );
        // (rate*dH - U*(T - Tc)) / (v0*Cp) at T = 310, Tc = 300
        let expected = ((-2.0) * (-34500.0) - 5000.0 * 10.0) / (16.3 * 159.0);
        assert_relative_eq!(
            temperature_derivative(rate, 310.0, &params),
            expected,
            max_relative = 1e-12
        );
    }

    #[test]
    fn rhs_combines_both_balances() {
        let params = test_params();
        let (d_conc, d_temp) = reactor_rhs(&params, 0.1, 306.0).unwrap();
        let rate = reaction_rate(&params, 0.1, 306.0).unwrap();
        assert_relative_eq!(
            d_conc,
            concentration_derivative(rate, &params),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            d_temp,
            temperature_derivative(rate, 306.0, &params),
            max_relative = 1e-12
        );
    }
}

//! Variational-parameter optimization via golden-section search.
//!
//! The search treats "run a full sampling campaign at parameter α and return
//! its mean energy" as a black-box scalar objective. Golden-section search is
//! only guaranteed to find the minimizer of a noiseless unimodal function;
//! a Monte Carlo objective carries statistical error, so comparisons near the
//! minimum can flip when the energy difference falls below the sampling noise.
//! The bracket still shrinks monotonically and the search always terminates,
//! but the returned optimum is a best-effort estimate. Callers needing higher
//! fidelity should tighten the campaign statistics, not the tolerance.

use crate::error::VmcError;

/// Result of one optimizer invocation.
#[derive(Clone, Debug)]
pub struct OptimizationResult {
    /// Location of the minimum: the midpoint of the final bracket.
    pub alpha: f64,
    /// Objective value at `alpha`.
    pub energy: f64,
    /// Number of objective evaluations performed.
    pub evaluations: usize,
}

/// Find the minimizer of a unimodal objective on the bracket [a, b].
///
/// Interior points split the bracket by the golden ratio φ = (√5+1)/2; each
/// iteration compares the objective at the two interior points and shrinks
/// the bracket toward the smaller value, until the bracket width is within
/// `tol`. Objective failures propagate to the caller unchanged.
pub fn golden_section_search<F>(
    mut f: F,
    a: f64,
    b: f64,
    tol: f64,
) -> Result<OptimizationResult, VmcError>
where
    F: FnMut(f64) -> Result<f64, VmcError>,
{
    VmcError::check_bracket(a, b)?;
    VmcError::check_tolerance(tol)?;

    let gr = (5.0_f64.sqrt() + 1.0) / 2.0;
    let (mut a, mut b) = (a, b);
    let mut c = b - (b - a) / gr;
    let mut d = a + (b - a) / gr;
    let mut evaluations = 0usize;

    while (b - a).abs() > tol {
        if f(c)? < f(d)? {
            b = d;
        } else {
            a = c;
        }
        evaluations += 2;
        c = b - (b - a) / gr;
        d = a + (b - a) / gr;
    }

    let alpha = 0.5 * (a + b);
    let energy = f(alpha)?;
    evaluations += 1;

    Ok(OptimizationResult {
        alpha,
        energy,
        evaluations,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_quadratic_minimum() {
        let result =
            golden_section_search(|x| Ok((x - 0.7).powi(2)), 0.0, 2.0, 1e-6).unwrap();
        assert_relative_eq!(result.alpha, 0.7, epsilon = 1e-5);
        assert!(result.energy < 1e-9);
    }

    #[test]
    fn test_minimum_near_bracket_edge() {
        let result =
            golden_section_search(|x| Ok((x - 0.55).powi(2) - 1.0), 0.5, 1.1, 1e-4).unwrap();
        assert_relative_eq!(result.alpha, 0.55, epsilon = 1e-3);
        assert_relative_eq!(result.energy, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_bracket_and_tolerance_validation() {
        let f = |x: f64| Ok(x * x);
        assert_eq!(
            golden_section_search(f, 1.0, 0.5, 1e-4).err(),
            Some(VmcError::BadBracket(1.0, 0.5))
        );
        assert_eq!(
            golden_section_search(f, 0.0, 1.0, 0.0).err(),
            Some(VmcError::BadTolerance(0.0))
        );
        assert_eq!(
            golden_section_search(f, 0.0, 1.0, -1e-3).err(),
            Some(VmcError::BadTolerance(-1e-3))
        );
    }

    #[test]
    fn test_objective_failure_propagates() {
        let result = golden_section_search(
            |_| Err(VmcError::InsufficientSamples),
            0.0,
            1.0,
            1e-4,
        );
        assert_eq!(result.err(), Some(VmcError::InsufficientSamples));
    }
}

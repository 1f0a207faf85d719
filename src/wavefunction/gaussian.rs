//! Gaussian product ansatz for particles in an anisotropic harmonic trap.

use nalgebra::DVector;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::VmcError;
use super::traits::TrialWfn;

/// Gaussian trial wavefunction for an anisotropic harmonic trap:
///
/// ψ(R) = exp(−½ · α · Σᵢ Σ_d ω_d · x_{i,d}²)
///
/// where the sum runs over every particle i and spatial dimension d, each
/// squared coordinate weighted by the trap frequency of its dimension.
/// α is the scalar variational parameter; all fields are immutable for the
/// duration of one sampling campaign.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaussianTrap {
    alpha: f64,
    n_particles: usize,
    n_dimensions: usize,
    omegas: DVector<f64>,
}

impl GaussianTrap {
    /// Create a validated ansatz. Fails fast on non-positive particle or
    /// dimension counts and on a trap-frequency vector of the wrong length.
    pub fn new(
        alpha: f64,
        n_particles: usize,
        n_dimensions: usize,
        omegas: DVector<f64>,
    ) -> Result<Self, VmcError> {
        VmcError::check_particles(n_particles)?;
        VmcError::check_dimensions(n_dimensions)?;
        VmcError::check_omegas(n_dimensions, omegas.len())?;
        Ok(Self {
            alpha,
            n_particles,
            n_dimensions,
            omegas,
        })
    }

    /// Same ansatz at a different variational parameter.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn n_particles(&self) -> usize {
        self.n_particles
    }

    pub fn n_dimensions(&self) -> usize {
        self.n_dimensions
    }

    pub fn omegas(&self) -> &DVector<f64> {
        &self.omegas
    }

    /// Σᵢ Σ_d ω_d · x_{i,d}² over the whole configuration.
    fn weighted_square_sum(&self, r: &[DVector<f64>]) -> f64 {
        r.iter()
            .map(|p| {
                p.iter()
                    .enumerate()
                    .map(|(d, x)| self.omegas[d] * x * x)
                    .sum::<f64>()
            })
            .sum()
    }
}

impl TrialWfn for GaussianTrap {
    /// Each coordinate independently uniform in [−1, 1).
    fn initialize<R: Rng>(&self, rng: &mut R) -> Vec<DVector<f64>> {
        (0..self.n_particles)
            .map(|_| DVector::from_fn(self.n_dimensions, |_, _| rng.gen_range(-1.0..1.0)))
            .collect()
    }

    fn evaluate(&self, r: &[DVector<f64>]) -> f64 {
        (-0.5 * self.alpha * self.weighted_square_sum(r)).exp()
    }
}

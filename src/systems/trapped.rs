//! Interacting particles in an anisotropic harmonic trap.
//!
//! The Hamiltonian (in units of ħω) is a kinetic term, a harmonic trap
//! term, and a Gaussian pair repulsion:
//!
//! H = −½·hom·Σᵢ ∇ᵢ² + ½·Σᵢ Σ_d ω_d²·x_{i,d}² + g·Σ_{j<k} exp(−r_{jk}²)

use nalgebra::DVector;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::VmcError;
use crate::sampling::EnergyCalculator;
use crate::wavefunction::{GaussianTrap, TrialWfn};

/// Default Gaussian pair-interaction strength g.
pub const DEFAULT_INTERACTION: f64 = 3.0;
/// Default reduced kinetic-energy prefactor (ħω-scaled mass term).
pub const DEFAULT_KINETIC_PREFACTOR: f64 = 1.0;
/// Default finite-difference step for the kinetic estimator.
pub const DEFAULT_FD_STEP: f64 = 0.01;

/// Trapped interacting particles: Gaussian ansatz plus physical constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrappedBosons {
    wfn: GaussianTrap,
    interaction: f64,
    kinetic_prefactor: f64,
    fd_step: f64,
}

impl TrappedBosons {
    /// Create a system with the default constants.
    pub fn new(wfn: GaussianTrap) -> Self {
        Self {
            wfn,
            interaction: DEFAULT_INTERACTION,
            kinetic_prefactor: DEFAULT_KINETIC_PREFACTOR,
            fd_step: DEFAULT_FD_STEP,
        }
    }

    /// Set the pair-interaction strength g.
    pub fn with_interaction(mut self, g: f64) -> Self {
        self.interaction = g;
        self
    }

    /// Set the reduced kinetic-energy prefactor.
    pub fn with_kinetic_prefactor(mut self, hom: f64) -> Self {
        self.kinetic_prefactor = hom;
        self
    }

    /// Set the finite-difference step h.
    pub fn with_fd_step(mut self, h: f64) -> Self {
        self.fd_step = h;
        self
    }

    /// Same system at a different variational parameter.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.wfn = self.wfn.with_alpha(alpha);
        self
    }

    pub fn wfn(&self) -> &GaussianTrap {
        &self.wfn
    }

    /// Local kinetic energy: −½·hom·Σᵢ ∇ᵢ²ψ / ψ, with the Laplacian taken by
    /// central finite differences one degree of freedom at a time.
    ///
    /// The caller's configuration is bit-for-bit unchanged on return. Fails
    /// with [`VmcError::DegenerateWavefunction`] when ψ at the unperturbed
    /// configuration is zero or non-finite, since the division is undefined.
    pub fn kinetic_energy(&self, r: &[DVector<f64>]) -> Result<f64, VmcError> {
        let psi = self.wfn.evaluate(r);
        if psi == 0.0 || !psi.is_finite() {
            return Err(VmcError::DegenerateWavefunction(psi));
        }

        let kin: f64 = self
            .wfn
            .numerical_laplacian(r, self.fd_step)
            .iter()
            .map(|lapl| -0.5 * self.kinetic_prefactor * lapl)
            .sum();

        Ok(kin / psi)
    }

    /// Local potential energy: harmonic trap plus Gaussian pair repulsion,
    /// every unordered pair counted exactly once.
    pub fn potential_energy(&self, r: &[DVector<f64>]) -> f64 {
        let omegas = self.wfn.omegas();

        let trap: f64 = 0.5
            * r.iter()
                .map(|p| {
                    p.iter()
                        .enumerate()
                        .map(|(d, x)| omegas[d] * omegas[d] * x * x)
                        .sum::<f64>()
                })
                .sum::<f64>();

        let n = r.len();
        let pairs: f64 = (0..n)
            .flat_map(|j| ((j + 1)..n).map(move |k| (j, k)))
            .map(|(j, k)| (-(&r[j] - &r[k]).norm_squared()).exp())
            .sum();

        trap + self.interaction * pairs
    }
}

impl TrialWfn for TrappedBosons {
    fn initialize<R: Rng>(&self, rng: &mut R) -> Vec<DVector<f64>> {
        self.wfn.initialize(rng)
    }

    fn evaluate(&self, r: &[DVector<f64>]) -> f64 {
        self.wfn.evaluate(r)
    }
}

impl EnergyCalculator for TrappedBosons {
    fn local_energy(&self, r: &[DVector<f64>]) -> Result<f64, VmcError> {
        Ok(self.kinetic_energy(r)? + self.potential_energy(r))
    }
}

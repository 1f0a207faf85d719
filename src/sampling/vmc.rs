//! Markov Chain Monte Carlo (MCMC) implementation for Variational Monte Carlo.
//!
//! This module provides the core VMC sampling algorithm using the Metropolis
//! algorithm with uniform box proposals and a deterministically seeded random
//! stream, so that two campaigns with identical parameters produce identical
//! sample sequences.

use nalgebra::DVector;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::VmcError;
use crate::wavefunction::TrialWfn;
use super::traits::EnergyCalculator;

/// Parameters for one VMC sampling campaign.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct VmcParams {
    /// Total number of Metropolis steps.
    pub n_steps: usize,
    /// Steps between retained energy samples; step 0 is always retained.
    pub thinning: usize,
    /// Half-width of the uniform proposal box.
    pub step_width: f64,
    /// Seed for the campaign's pseudo-random stream.
    pub seed: u64,
}

impl Default for VmcParams {
    fn default() -> Self {
        Self {
            n_steps: 200_000,
            thinning: 100,
            step_width: 0.8,
            seed: 42,
        }
    }
}

/// Current state of the random walk.
pub struct VmcState {
    pub positions: Vec<DVector<f64>>,
    pub wavefunction: f64,
}

/// Finalized results of one VMC sampling campaign.
#[derive(Clone, Debug)]
pub struct VmcResults {
    /// Mean local energy over the retained samples.
    pub energy: f64,
    /// Standard error: sample standard deviation / √count.
    pub error: f64,
    /// Fraction of proposed moves that were accepted.
    pub acceptance_rate: f64,
    /// The retained local-energy trace, in sampling order.
    pub samples: Vec<f64>,
}

impl VmcResults {
    /// Reduce a retained local-energy sequence to mean and standard error.
    ///
    /// An empty sequence has no defined statistics and fails with
    /// [`VmcError::InsufficientSamples`].
    pub fn from_samples(samples: Vec<f64>, acceptance_rate: f64) -> Result<Self, VmcError> {
        if samples.is_empty() {
            return Err(VmcError::InsufficientSamples);
        }

        let n = samples.len() as f64;
        let energy = samples.iter().sum::<f64>() / n;
        let variance = samples.iter().map(|e| (e - energy).powi(2)).sum::<f64>() / n;
        let error = (variance / n).sqrt();

        Ok(Self {
            energy,
            error,
            acceptance_rate,
            samples,
        })
    }
}

/// Metropolis random-walk engine for variational Monte Carlo.
///
/// The walk's stationary distribution is proportional to ψ². The sampler
/// exclusively owns the configuration buffer and the random stream for the
/// lifetime of one campaign. All retained samples from step 0 onward enter
/// the statistics; no burn-in discard is performed.
pub struct VmcSimulation<T: TrialWfn + EnergyCalculator> {
    system: T,
    params: VmcParams,
    rng: StdRng,
}

impl<T: TrialWfn + EnergyCalculator> VmcSimulation<T> {
    /// Create a campaign, failing fast on invalid sampling parameters.
    pub fn new(system: T, params: VmcParams) -> Result<Self, VmcError> {
        VmcError::check_steps(params.n_steps)?;
        VmcError::check_thinning(params.thinning)?;
        VmcError::check_step_width(params.step_width)?;
        Ok(Self {
            system,
            params,
            rng: StdRng::seed_from_u64(params.seed),
        })
    }

    /// Run the full campaign and reduce the retained samples.
    pub fn run(&mut self) -> Result<VmcResults, VmcError> {
        let mut state = self.initialize()?;
        let mut samples = Vec::with_capacity(self.params.n_steps / self.params.thinning + 1);
        let mut accepted = 0usize;

        for step in 0..self.params.n_steps {
            if self.metropolis_step(&mut state) {
                accepted += 1;
            }
            if step % self.params.thinning == 0 {
                samples.push(self.system.local_energy(&state.positions)?);
            }
        }

        let acceptance_rate = accepted as f64 / self.params.n_steps as f64;
        VmcResults::from_samples(samples, acceptance_rate)
    }

    /// Draw the initial configuration and evaluate the wavefunction there.
    fn initialize(&mut self) -> Result<VmcState, VmcError> {
        let positions = self.system.initialize(&mut self.rng);
        let wavefunction = self.system.evaluate(&positions);
        if wavefunction == 0.0 || !wavefunction.is_finite() {
            return Err(VmcError::DegenerateWavefunction(wavefunction));
        }
        Ok(VmcState {
            positions,
            wavefunction,
        })
    }

    /// Propose a uniform box move and accept or reject it.
    ///
    /// The acceptance ratio (ψ_new/ψ_cur)² against a fresh uniform(0,1) draw
    /// implements detailed balance for the ψ² target; an accepted candidate
    /// replaces the configuration wholesale.
    fn metropolis_step(&mut self, state: &mut VmcState) -> bool {
        let th = self.params.step_width;
        let candidate: Vec<DVector<f64>> = state
            .positions
            .iter()
            .map(|p| p.map(|x| x + self.rng.gen_range(-th..th)))
            .collect();

        let psi_new = self.system.evaluate(&candidate);
        let ratio = (psi_new / state.wavefunction).powi(2);

        if ratio > self.rng.gen::<f64>() {
            state.positions = candidate;
            state.wavefunction = psi_new;
            true
        } else {
            false
        }
    }
}

/// Run one full Metropolis campaign and reduction.
pub fn estimate_energy<T: TrialWfn + EnergyCalculator>(
    system: T,
    params: VmcParams,
) -> Result<VmcResults, VmcError> {
    VmcSimulation::new(system, params)?.run()
}

#[cfg(test)]
mod tests {
    use nalgebra::DVector;

    use super::*;
    use crate::systems::TrappedBosons;
    use crate::wavefunction::GaussianTrap;

    fn test_system(alpha: f64) -> TrappedBosons {
        let wfn = GaussianTrap::new(alpha, 2, 2, DVector::from_vec(vec![1.0, 2.0])).unwrap();
        TrappedBosons::new(wfn)
    }

    #[test]
    fn test_identical_seeds_give_identical_samples() {
        let params = VmcParams {
            n_steps: 500,
            thinning: 10,
            step_width: 0.5,
            seed: 314159,
        };
        let a = estimate_energy(test_system(0.8), params).unwrap();
        let b = estimate_energy(test_system(0.8), params).unwrap();
        assert_eq!(a.samples, b.samples);
        assert_eq!(a.energy, b.energy);
        assert_eq!(a.error, b.error);
    }

    #[test]
    fn test_thinning_beyond_step_count_retains_one_sample() {
        let params = VmcParams {
            n_steps: 5,
            thinning: 10,
            step_width: 0.5,
            seed: 1,
        };
        let results = estimate_energy(test_system(0.8), params).unwrap();
        assert_eq!(results.samples.len(), 1);
        assert_eq!(results.energy, results.samples[0]);
        assert_eq!(results.error, 0.0);
    }

    #[test]
    fn test_invalid_sampling_params_fail_fast() {
        let params = VmcParams {
            n_steps: 0,
            ..VmcParams::default()
        };
        assert_eq!(
            VmcSimulation::new(test_system(0.8), params).err(),
            Some(VmcError::BadStepCount(0))
        );

        let params = VmcParams {
            thinning: 0,
            ..VmcParams::default()
        };
        assert_eq!(
            VmcSimulation::new(test_system(0.8), params).err(),
            Some(VmcError::BadThinning(0))
        );

        let params = VmcParams {
            step_width: 0.0,
            ..VmcParams::default()
        };
        assert_eq!(
            VmcSimulation::new(test_system(0.8), params).err(),
            Some(VmcError::BadStepWidth(0.0))
        );
    }

    #[test]
    fn test_empty_sample_sequence_is_rejected() {
        assert_eq!(
            VmcResults::from_samples(Vec::new(), 0.0).err(),
            Some(VmcError::InsufficientSamples)
        );
    }

    #[test]
    fn test_acceptance_rate_is_a_fraction() {
        let params = VmcParams {
            n_steps: 1_000,
            thinning: 100,
            step_width: 0.8,
            seed: 7,
        };
        let results = estimate_energy(test_system(0.8), params).unwrap();
        assert!(results.acceptance_rate > 0.0);
        assert!(results.acceptance_rate <= 1.0);
    }
}

//! Traits for Monte Carlo sampling.

use nalgebra::DVector;

use crate::error::VmcError;

/// Trait for computing the local energy of a particle configuration.
///
/// The local energy is the sum of kinetic and potential contributions at one
/// configuration; its expectation under ψ² estimates the true energy. A
/// degenerate wavefunction value surfaces as an error, never as a NaN.
pub trait EnergyCalculator {
    fn local_energy(&self, positions: &[DVector<f64>]) -> Result<f64, VmcError>;
}

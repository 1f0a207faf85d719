//! Harmonic VMC - Variational Monte Carlo for trapped interacting particles.
//!
//! This crate estimates the ground-state energy of a small system of
//! interacting particles in an anisotropic harmonic trap. A Metropolis random
//! walk samples configurations distributed according to the squared Gaussian
//! trial wavefunction, the local energy (finite-difference kinetic term plus
//! trap and Gaussian pair potentials) is averaged over the retained samples,
//! and a golden-section search tunes the variational parameter α to minimize
//! the mean energy.

pub mod conf;
pub mod error;
pub mod sampling;
pub mod systems;
pub mod wavefunction;

// Re-export commonly used types at crate root
pub use conf::{read_config, ConfigError, OptimizeConfig, SimulationConfig, SystemConfig};
pub use error::VmcError;
pub use sampling::{
    estimate_energy, golden_section_search, EnergyCalculator, OptimizationResult, VmcParams,
    VmcResults, VmcSimulation,
};
pub use systems::TrappedBosons;
pub use wavefunction::{GaussianTrap, TrialWfn};

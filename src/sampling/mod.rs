//! Sampling module - Monte Carlo sampling and parameter optimization.

mod optimize;
mod traits;
mod vmc;

pub use optimize::{golden_section_search, OptimizationResult};
pub use traits::EnergyCalculator;
pub use vmc::{estimate_energy, VmcParams, VmcResults, VmcSimulation, VmcState};

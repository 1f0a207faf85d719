//! YAML configuration for VMC campaigns.
//!
//! A config file describes the physical system, the sampling parameters, and
//! optionally the optimization bracket; see the example at the bottom of this
//! file.

use nalgebra::DVector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::VmcError;
use crate::sampling::VmcParams;
use crate::systems::{TrappedBosons, DEFAULT_INTERACTION};
use crate::wavefunction::GaussianTrap;

/// Returned from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Physical system description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    pub particles: usize,
    pub dimensions: usize,
    /// One trap frequency per spatial dimension.
    pub omegas: Vec<f64>,
    #[serde(default = "default_interaction")]
    pub interaction: f64,
}

fn default_interaction() -> f64 {
    DEFAULT_INTERACTION
}

impl SystemConfig {
    /// Build the physical system at a given variational parameter,
    /// validating the counts and the trap-frequency vector.
    pub fn build(&self, alpha: f64) -> Result<TrappedBosons, VmcError> {
        let omegas = DVector::from_vec(self.omegas.clone());
        let wfn = GaussianTrap::new(alpha, self.particles, self.dimensions, omegas)?;
        Ok(TrappedBosons::new(wfn).with_interaction(self.interaction))
    }
}

/// Golden-section bracket and tolerance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OptimizeConfig {
    pub lower: f64,
    pub upper: f64,
    pub tolerance: f64,
}

/// Full simulation description read from one YAML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub system: SystemConfig,
    pub sampling: VmcParams,
    pub optimize: Option<OptimizeConfig>,
}

/// Read a simulation config from a YAML file.
pub fn read_config(filename: &str) -> Result<SimulationConfig, ConfigError> {
    let file = std::fs::File::open(filename)?;
    let reader = std::io::BufReader::new(file);
    Ok(serde_yaml::from_reader(reader)?)
}

// example of yaml file
// system:
//   particles: 4
//   dimensions: 3
//   omegas: [1.0, 2.0, 3.0]
//   interaction: 3.0
// sampling:
//   n_steps: 200000
//   thinning: 100
//   step_width: 0.8
//   seed: 42
// optimize:
//   lower: 0.5
//   upper: 1.1
//   tolerance: 0.001

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let yaml = "
system:
  particles: 4
  dimensions: 3
  omegas: [1.0, 2.0, 3.0]
sampling:
  n_steps: 200000
  thinning: 100
  step_width: 0.8
  seed: 42
optimize:
  lower: 0.5
  upper: 1.1
  tolerance: 0.001
";
        let config: SimulationConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.system.particles, 4);
        assert_eq!(config.system.omegas.len(), 3);
        assert_eq!(config.system.interaction, DEFAULT_INTERACTION);
        assert_eq!(config.sampling.thinning, 100);
        assert_eq!(config.optimize.unwrap().lower, 0.5);

        let system = config.system.build(0.9).unwrap();
        assert_eq!(system.wfn().n_particles(), 4);
    }

    #[test]
    fn test_mismatched_omegas_fail_at_build() {
        let yaml = "
system:
  particles: 2
  dimensions: 3
  omegas: [1.0, 2.0]
sampling:
  n_steps: 1000
  thinning: 10
  step_width: 0.8
  seed: 42
";
        let config: SimulationConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            config.system.build(0.9).err(),
            Some(VmcError::OmegaLengthMismatch {
                expected: 3,
                got: 2
            })
        );
    }
}

//! Error types for campaign setup, sampling, and optimization.
//!
//! All errors derive [`thiserror::Error`]. Every failure path in the crate is
//! an explicit `Result`; no condition is ever reported as a NaN or a sentinel
//! float that could be confused with a real energy value.

use thiserror::Error;

/// Returned from campaign setup, sampling, and optimization.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VmcError {
    /// The trial wavefunction evaluated to zero or a non-finite value at a
    /// configuration where a division by ψ is required.
    #[error("trial wavefunction is degenerate at the current configuration; got psi = {0}")]
    DegenerateWavefunction(f64),

    /// No local-energy samples were retained; mean and standard error are
    /// undefined for an empty sample sequence.
    #[error("no local-energy samples were retained; cannot compute statistics")]
    InsufficientSamples,

    #[error("particle count must be greater than 0; got {0}")]
    BadParticleCount(usize),

    #[error("dimension count must be greater than 0; got {0}")]
    BadDimensionCount(usize),

    /// The trap-frequency vector must carry one entry per spatial dimension.
    #[error("expected one trap frequency per dimension ({expected}); got {got}")]
    OmegaLengthMismatch { expected: usize, got: usize },

    #[error("step count must be greater than 0; got {0}")]
    BadStepCount(usize),

    #[error("thinning interval must be greater than 0; got {0}")]
    BadThinning(usize),

    #[error("proposal step width must be finite and greater than 0; got {0}")]
    BadStepWidth(f64),

    #[error("bracket lower bound must lie below the upper bound; got [{0}, {1}]")]
    BadBracket(f64, f64),

    #[error("tolerance must be finite and greater than 0; got {0}")]
    BadTolerance(f64),
}

impl VmcError {
    pub(crate) fn check_particles(n: usize) -> Result<(), Self> {
        (n > 0).then_some(()).ok_or(Self::BadParticleCount(n))
    }

    pub(crate) fn check_dimensions(n: usize) -> Result<(), Self> {
        (n > 0).then_some(()).ok_or(Self::BadDimensionCount(n))
    }

    pub(crate) fn check_omegas(expected: usize, got: usize) -> Result<(), Self> {
        (expected == got)
            .then_some(())
            .ok_or(Self::OmegaLengthMismatch { expected, got })
    }

    pub(crate) fn check_steps(n: usize) -> Result<(), Self> {
        (n > 0).then_some(()).ok_or(Self::BadStepCount(n))
    }

    pub(crate) fn check_thinning(n: usize) -> Result<(), Self> {
        (n > 0).then_some(()).ok_or(Self::BadThinning(n))
    }

    pub(crate) fn check_step_width(width: f64) -> Result<(), Self> {
        (width.is_finite() && width > 0.0)
            .then_some(())
            .ok_or(Self::BadStepWidth(width))
    }

    pub(crate) fn check_bracket(a: f64, b: f64) -> Result<(), Self> {
        (a.is_finite() && b.is_finite() && a < b)
            .then_some(())
            .ok_or(Self::BadBracket(a, b))
    }

    pub(crate) fn check_tolerance(tol: f64) -> Result<(), Self> {
        (tol.is_finite() && tol > 0.0)
            .then_some(())
            .ok_or(Self::BadTolerance(tol))
    }
}

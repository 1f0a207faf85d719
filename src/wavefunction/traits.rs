//! Trial-wavefunction trait for VMC sampling.
//!
//! A trial wavefunction owns the variational parameters and knows how to
//! draw an initial particle configuration from an explicit random source.

use nalgebra::DVector;
use rand::Rng;

/// Many-particle trial wavefunction.
///
/// A configuration is one position vector per particle; every vector has the
/// same length (the spatial dimension count).
pub trait TrialWfn {
    /// Draw an initial random configuration from `rng`.
    fn initialize<R: Rng>(&self, rng: &mut R) -> Vec<DVector<f64>>;

    /// Evaluate the wavefunction at configuration `r`.
    fn evaluate(&self, r: &[DVector<f64>]) -> f64;

    /// Per-particle Laplacians via central finite differences.
    ///
    /// Each degree of freedom is perturbed by ±h in a fresh copy of the
    /// configuration; the caller's `r` is left untouched. Accuracy is O(h²).
    fn numerical_laplacian(&self, r: &[DVector<f64>], h: f64) -> Vec<f64> {
        let psi = self.evaluate(r);
        let mut laplacian = vec![0.0; r.len()];
        for i in 0..r.len() {
            for axis in 0..r[i].len() {
                let mut r_fwd = r.to_vec();
                let mut r_bwd = r.to_vec();
                r_fwd[i][axis] += h;
                r_bwd[i][axis] -= h;
                laplacian[i] +=
                    (self.evaluate(&r_fwd) - 2.0 * psi + self.evaluate(&r_bwd)) / (h * h);
            }
        }
        laplacian
    }
}

//! Flat Rayleigh fading
//!
//! Each sample is multiplied by its own complex gain h = a + jb with
//! a, b ~ N(0, 1), giving a Rayleigh magnitude and uniform phase. Gains are
//! drawn independently per sample: there is no Doppler spectrum and no
//! correlation between neighbouring samples.

use crate::error::{ensure_same_len, Result};
use crate::Symbol;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

#[derive(Debug, Clone, Copy, Default)]
pub struct RayleighFading;

impl RayleighFading {
    pub fn new() -> Self {
        Self
    }

    /// Draw `n` independent fading gains, real part first then imaginary part
    pub fn draw_gains<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<Symbol> {
        (0..n)
            .map(|_| {
                let re: f64 = StandardNormal.sample(rng);
                let im: f64 = StandardNormal.sample(rng);
                Symbol::new(re, im)
            })
            .collect()
    }

    /// Apply freshly drawn gains to `samples`
    ///
    /// Consumes the generator exactly like `draw_gains(samples.len(), rng)`,
    /// so a cloned generator reproduces the gains used here.
    pub fn apply<R: Rng + ?Sized>(&self, samples: &[Symbol], rng: &mut R) -> Vec<Symbol> {
        let gains = self.draw_gains(samples.len(), rng);
        let faded: Vec<Symbol> = samples.iter().zip(gains.iter()).map(|(s, h)| s * h).collect();

        log::trace!("symbols output from rayleigh channel: {:?}", faded);

        faded
    }
}

/// Multiply samples by a known gain vector
pub fn apply_gains(samples: &[Symbol], gains: &[Symbol]) -> Result<Vec<Symbol>> {
    ensure_same_len(samples.len(), gains.len())?;
    Ok(samples.iter().zip(gains.iter()).map(|(s, h)| s * h).collect())
}

/// Zero-forcing equalization against a known gain vector
///
/// Divides every sample by its gain. A zero gain yields a non-finite sample.
pub fn equalize(samples: &[Symbol], gains: &[Symbol]) -> Result<Vec<Symbol>> {
    ensure_same_len(samples.len(), gains.len())?;
    Ok(samples.iter().zip(gains.iter()).map(|(s, h)| s / h).collect())
}

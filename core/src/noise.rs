//! Additive channel noise
//!
//! Noise power is derived from the target SNR relative to `NOISE_FLOOR_DB`.
//! The default draw is `power * U` with U uniform in [0, 1) on the real axis
//! only, kept as the default even though the model is labelled AWGN.
//! Complex Gaussian noise is available but must be selected explicitly.

use crate::{Symbol, NOISE_FLOOR_DB};
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// Absolute noise power for a target SNR in dB
pub fn noise_power(snr_db: f64) -> f64 {
    10f64.powf((NOISE_FLOOR_DB - snr_db) / 10.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoiseKind {
    /// Real-valued `power * U`, U ~ Uniform[0, 1)
    #[default]
    Uniform,
    /// Complex Gaussian with total variance `power` (N(0, power/2) per component)
    Gaussian,
}

#[derive(Debug, Clone, Copy)]
pub struct AwgnNoise {
    power: f64,
    kind: NoiseKind,
}

impl AwgnNoise {
    pub fn new(snr_db: f64) -> Self {
        Self::with_kind(snr_db, NoiseKind::Uniform)
    }

    pub fn with_kind(snr_db: f64, kind: NoiseKind) -> Self {
        Self {
            power: noise_power(snr_db),
            kind,
        }
    }

    pub fn power(&self) -> f64 {
        self.power
    }

    pub fn kind(&self) -> NoiseKind {
        self.kind
    }

    /// Draw one noise term
    pub fn next_sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Symbol {
        match self.kind {
            NoiseKind::Uniform => {
                let u: f64 = rng.gen();
                Symbol::new(self.power * u, 0.0)
            }
            NoiseKind::Gaussian => {
                let std_dev = (self.power / 2.0).sqrt();
                let i: f64 = StandardNormal.sample(rng);
                let q: f64 = StandardNormal.sample(rng);
                Symbol::new(i * std_dev, q * std_dev)
            }
        }
    }

    /// Add one independent noise term to every sample
    pub fn apply<R: Rng + ?Sized>(&self, samples: &[Symbol], rng: &mut R) -> Vec<Symbol> {
        samples.iter().map(|s| s + self.next_sample(rng)).collect()
    }
}

//! Simplified LTE-like radio channel simulator
//!
//! BPSK symbols are carried over a single OFDM symbol spanning the whole
//! bitstream, then distorted by per-sample Rayleigh fading and additive noise.

pub mod error;
pub mod modulation;
pub mod ofdm;
pub mod fading;
pub mod noise;
pub mod channel;
pub mod metrics;
pub mod simulation;

pub use channel::LteChannel;
pub use error::{ChannelError, Result};
pub use fading::RayleighFading;
pub use metrics::{compare_bits, norm, norms};
pub use modulation::{demodulate, modulate};
pub use noise::{noise_power, AwgnNoise, NoiseKind};
pub use ofdm::{OfdmDemodulator, OfdmModulator};
pub use simulation::{random_bits, Simulation, SimulationConfig, SimulationReport};

/// Complex baseband sample, used both for symbols and OFDM samples.
pub type Symbol = rustfft::num_complex::Complex<f64>;

// Channel configuration
pub const NOISE_FLOOR_DB: f64 = -90.0;

// Presentation scale applied to sample magnitudes by `norm`
pub const NORM_SCALE: f64 = 1e4;

// Driver defaults
pub const DEFAULT_NUM_BITS: usize = 1000;
pub const DEFAULT_SNR_DB: f64 = 20.0;
pub const DEFAULT_PORT: u16 = 8080;

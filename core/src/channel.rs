use crate::fading::RayleighFading;
use crate::modulation;
use crate::noise::{AwgnNoise, NoiseKind};
use crate::ofdm::{OfdmDemodulator, OfdmModulator};
use crate::Symbol;
use rand::Rng;

/// LTE-like link: BPSK over one OFDM symbol, Rayleigh fading, then additive noise.
///
/// The channel has no per-run state. It keeps FFT plan caches and the
/// selected noise kind, so one instance can serve any number of runs.
/// Transmit and receive are separate calls; there is no combined `receive`.
pub struct LteChannel {
    ofdm_modulator: OfdmModulator,
    ofdm_demodulator: OfdmDemodulator,
    fading: RayleighFading,
    noise_kind: NoiseKind,
}

impl LteChannel {
    pub fn new() -> Self {
        Self::with_noise_kind(NoiseKind::Uniform)
    }

    pub fn with_noise_kind(noise_kind: NoiseKind) -> Self {
        Self {
            ofdm_modulator: OfdmModulator::new(),
            ofdm_demodulator: OfdmDemodulator::new(),
            fading: RayleighFading::new(),
            noise_kind,
        }
    }

    pub fn noise_kind(&self) -> NoiseKind {
        self.noise_kind
    }

    pub fn set_noise_kind(&mut self, noise_kind: NoiseKind) {
        self.noise_kind = noise_kind;
    }

    pub fn modulate(&self, bits: &[bool]) -> Vec<Symbol> {
        modulation::modulate(bits)
    }

    pub fn ofdm_modulate(&mut self, symbols: &[Symbol]) -> Vec<Symbol> {
        self.ofdm_modulator.modulate(symbols)
    }

    pub fn rayleigh<R: Rng + ?Sized>(&self, samples: &[Symbol], rng: &mut R) -> Vec<Symbol> {
        self.fading.apply(samples, rng)
    }

    pub fn awgn<R: Rng + ?Sized>(&self, samples: &[Symbol], snr_db: f64, rng: &mut R) -> Vec<Symbol> {
        AwgnNoise::with_kind(snr_db, self.noise_kind).apply(samples, rng)
    }

    /// Send `bits` through the channel at `snr_db`
    ///
    /// Fixed order: modulate, OFDM modulate, fading, noise. All randomness
    /// comes from `rng`, fading draws first.
    pub fn transmit<R: Rng + ?Sized>(&mut self, bits: &[bool], snr_db: f64, rng: &mut R) -> Vec<Symbol> {
        let symbols = self.modulate(bits);
        let symbols = self.ofdm_modulate(&symbols);
        let symbols = self.rayleigh(&symbols, rng);
        let transmitted = self.awgn(&symbols, snr_db, rng);

        log::debug!(
            "Transmitted {} bits at {} dB SNR ({:?} noise)",
            bits.len(),
            snr_db,
            self.noise_kind
        );

        transmitted
    }

    pub fn ofdm_demodulate(&mut self, samples: &[Symbol]) -> Vec<Symbol> {
        self.ofdm_demodulator.demodulate(samples)
    }

    pub fn demodulate(&self, symbols: &[Symbol]) -> Vec<bool> {
        modulation::demodulate(symbols)
    }
}

impl Default for LteChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_transmit_is_composition_of_stages() {
        let bits = vec![true, false, false, true, true, false, true];
        let mut channel = LteChannel::new();

        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let transmitted = channel.transmit(&bits, 15.0, &mut rng);

        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let symbols = channel.modulate(&bits);
        let samples = channel.ofdm_modulate(&symbols);
        let faded = channel.rayleigh(&samples, &mut rng);
        let expected = channel.awgn(&faded, 15.0, &mut rng);

        assert_eq!(transmitted, expected);
    }

    #[test]
    fn test_every_stage_preserves_length() {
        let mut channel = LteChannel::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        for n in [0usize, 1, 5, 64, 1000] {
            let bits: Vec<bool> = (0..n).map(|i| i % 2 == 1).collect();

            let symbols = channel.modulate(&bits);
            assert_eq!(symbols.len(), n);
            let samples = channel.ofdm_modulate(&symbols);
            assert_eq!(samples.len(), n);
            let faded = channel.rayleigh(&samples, &mut rng);
            assert_eq!(faded.len(), n);
            let noisy = channel.awgn(&faded, 20.0, &mut rng);
            assert_eq!(noisy.len(), n);
            let received = channel.ofdm_demodulate(&noisy);
            assert_eq!(received.len(), n);
            assert_eq!(channel.demodulate(&received).len(), n);
        }
    }

    #[test]
    fn test_same_seed_same_transmission() {
        let bits: Vec<bool> = (0..100).map(|i| i % 7 < 3).collect();
        let mut channel = LteChannel::new();

        let a = channel.transmit(&bits, 20.0, &mut ChaCha8Rng::seed_from_u64(5));
        let b = channel.transmit(&bits, 20.0, &mut ChaCha8Rng::seed_from_u64(5));
        let c = channel.transmit(&bits, 20.0, &mut ChaCha8Rng::seed_from_u64(6));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_gaussian_noise_selected_explicitly() {
        assert_eq!(LteChannel::new().noise_kind(), NoiseKind::Uniform);
        assert_eq!(
            LteChannel::with_noise_kind(NoiseKind::Gaussian).noise_kind(),
            NoiseKind::Gaussian
        );

        let mut channel = LteChannel::new();
        channel.set_noise_kind(NoiseKind::Gaussian);
        assert_eq!(channel.noise_kind(), NoiseKind::Gaussian);
    }
}

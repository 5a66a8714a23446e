use crate::Symbol;
use rustfft::FftPlanner;

/// Single-symbol OFDM transmitter.
///
/// Every input symbol occupies one subcarrier and the transform spans the
/// whole sequence, so there is no cyclic prefix, padding or pilot insertion.
pub struct OfdmModulator {
    fft_planner: FftPlanner<f64>,
}

pub struct OfdmDemodulator {
    fft_planner: FftPlanner<f64>,
}

impl OfdmModulator {
    pub fn new() -> Self {
        Self {
            fft_planner: FftPlanner::new(),
        }
    }

    /// Map frequency-domain symbols to time-domain samples
    ///
    /// Inverse DFT scaled by 1/N so that `OfdmDemodulator::demodulate`
    /// recovers the input exactly.
    pub fn modulate(&mut self, symbols: &[Symbol]) -> Vec<Symbol> {
        let n = symbols.len();
        if n == 0 {
            return Vec::new();
        }

        let ifft = self.fft_planner.plan_fft_inverse(n);
        let mut time_domain = symbols.to_vec();
        ifft.process(&mut time_domain);

        let scale = 1.0 / n as f64;
        for sample in time_domain.iter_mut() {
            *sample *= scale;
        }

        time_domain
    }
}

impl OfdmDemodulator {
    pub fn new() -> Self {
        Self {
            fft_planner: FftPlanner::new(),
        }
    }

    /// Map time-domain samples back to frequency-domain symbols (unscaled forward DFT)
    pub fn demodulate(&mut self, samples: &[Symbol]) -> Vec<Symbol> {
        let n = samples.len();
        if n == 0 {
            return Vec::new();
        }

        let fft = self.fft_planner.plan_fft_forward(n);
        let mut freq_domain = samples.to_vec();
        fft.process(&mut freq_domain);

        freq_domain
    }
}

impl Default for OfdmModulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for OfdmDemodulator {
    fn default() -> Self {
        Self::new()
    }
}

use crate::error::{ensure_same_len, Result};
use crate::{Symbol, NORM_SCALE};

/// Fraction of index-aligned bits that agree
///
/// Two empty bitstreams match trivially and return 1.0.
pub fn compare_bits(original: &[bool], recovered: &[bool]) -> Result<f64> {
    ensure_same_len(original.len(), recovered.len())?;

    if original.is_empty() {
        return Ok(1.0);
    }

    let matches = original
        .iter()
        .zip(recovered.iter())
        .filter(|(a, b)| a == b)
        .count();

    Ok(matches as f64 / original.len() as f64)
}

/// Sample magnitude scaled by `NORM_SCALE` and truncated, for display only
pub fn norm(symbol: Symbol) -> i64 {
    (NORM_SCALE * symbol.norm()) as i64
}

pub fn norms(samples: &[Symbol]) -> Vec<i64> {
    samples.iter().map(|&s| norm(s)).collect()
}

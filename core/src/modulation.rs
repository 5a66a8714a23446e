use crate::Symbol;

/// BPSK map: false -> -1+0i, true -> +1+0i
pub fn modulate(bits: &[bool]) -> Vec<Symbol> {
    bits.iter()
        .map(|&bit| {
            let amplitude = if bit { 1.0 } else { -1.0 };
            Symbol::new(amplitude, 0.0)
        })
        .collect()
}

/// Hard decision on the real part. A symbol sitting exactly on zero decodes as 1.
pub fn demodulate(symbols: &[Symbol]) -> Vec<bool> {
    symbols.iter().map(|s| s.re >= 0.0).collect()
}

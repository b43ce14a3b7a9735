// Discrete Fourier transform of a closed path
// Each point is read as x + iy, each coefficient becomes one wave

use std::f64::consts::PI;

use num_complex::Complex64;

use crate::wave::{Point, Wave};

/// Fits one wave per DFT coefficient of `path`, largest amplitude first.
///
/// Frequencies are folded into the centered band `(-N/2, N/2]` so the curve
/// between samples stays smooth. Sweeping the result with step `2π / N`
/// passes through every input point.
pub fn dft(path: &[Point]) -> Vec<Wave> {
    let n = path.len();

    let mut waves: Vec<Wave> = (0..n)
        .map(|k| {
            let sum: Complex64 = path
                .iter()
                .enumerate()
                .map(|(i, p)| {
                    // reduce k*i mod n first to keep the angle small
                    let phi = -2.0 * PI * ((k * i) % n) as f64 / n as f64;
                    Complex64::new(p.x, p.y) * Complex64::cis(phi)
                })
                .sum();
            let c = sum / n as f64;

            Wave {
                amplitude: c.norm(),
                frequency: centered_frequency(k, n),
                phase: c.arg(),
            }
        })
        .collect();

    waves.sort_by(|a, b| b.amplitude.total_cmp(&a.amplitude));
    waves
}

fn centered_frequency(k: usize, n: usize) -> f64 {
    if k > n / 2 {
        k as f64 - n as f64
    } else {
        k as f64
    }
}

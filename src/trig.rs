// Math providers for the sampler
// The sweep is generic over where pi, cos and sin come from

use num_complex::Complex64;

/// Supplies the constants and the unit phasor the sampler needs.
pub trait Trig {
    fn pi() -> f64;

    /// `(cos(phi), sin(phi))`
    fn cis(phi: f64) -> (f64, f64);
}

/// Plain `f64` intrinsics.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdTrig;

impl Trig for StdTrig {
    fn pi() -> f64 {
        std::f64::consts::PI
    }

    fn cis(phi: f64) -> (f64, f64) {
        let (sin, cos) = phi.sin_cos();
        (cos, sin)
    }
}

/// Complex-number backend: pi is `arg(-1)`, the phasor is `e^(i*phi)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplexTrig;

impl Trig for ComplexTrig {
    fn pi() -> f64 {
        Complex64::new(-1.0, 0.0).arg()
    }

    fn cis(phi: f64) -> (f64, f64) {
        let z = Complex64::cis(phi);
        (z.re, z.im)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn providers_agree_on_pi() {
        assert_abs_diff_eq!(StdTrig::pi(), ComplexTrig::pi(), epsilon = 1e-15);
    }

    #[test]
    fn providers_agree_on_phasors() {
        for i in 0..64 {
            let phi = -7.0 + i as f64 * 0.25;
            let (c1, s1) = StdTrig::cis(phi);
            let (c2, s2) = ComplexTrig::cis(phi);
            assert_abs_diff_eq!(c1, c2, epsilon = 1e-12);
            assert_abs_diff_eq!(s1, s2, epsilon = 1e-12);
        }
    }

    #[test]
    fn quarter_turn() {
        let (cos, sin) = StdTrig::cis(StdTrig::pi() / 2.0);
        assert_abs_diff_eq!(cos, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(sin, 1.0, epsilon = 1e-15);
    }
}

// Curve sampler
// Walks the angle over [0, 2pi + 1] and sums every wave's phasor at each step
// Handed to gui.rs as the points of the curve

use std::iter::FusedIterator;
use std::marker::PhantomData;

use log::debug;

use crate::error::{Error, Result};
use crate::trig::{StdTrig, Trig};
use crate::wave::{Point, Wave};

/// Vector sum of all phasors at angle `theta`.
pub fn phasor_sum<T: Trig>(waves: &[Wave], theta: f64) -> Point {
    waves.iter().fold(Point::default(), |acc, w| {
        let (cos, sin) = T::cis(w.frequency * theta + w.phase);
        Point::new(acc.x + w.amplitude * cos, acc.y + w.amplitude * sin)
    })
}

/// Lazy, single pass sequence of curve points in increasing angle order.
#[derive(Debug, Clone)]
pub struct Sweep<'a, T = StdTrig> {
    waves: &'a [Wave],
    step: f64,
    upper: f64,
    index: usize,
    trig: PhantomData<T>,
}

/// Samples the curve with the standard library's trig.
pub fn sweep(waves: &[Wave]) -> Result<Sweep<'_>> {
    sweep_with::<StdTrig>(waves)
}

/// Samples the curve with the given math provider.
///
/// The step is one turn divided by the wave count, so an empty list is an
/// error. The upper bound `2pi + 1` is inclusive.
pub fn sweep_with<T: Trig>(waves: &[Wave]) -> Result<Sweep<'_, T>> {
    if waves.is_empty() {
        return Err(Error::EmptyWaves);
    }

    let step = 2.0 * T::pi() / waves.len() as f64;
    let upper = 2.0 * T::pi() + 1.0;
    debug!(
        "Sweeping {} waves over [0, {:.4}] with step {:.6}",
        waves.len(),
        upper,
        step
    );

    Ok(Sweep {
        waves,
        step,
        upper,
        index: 0,
        trig: PhantomData,
    })
}

impl<T> Sweep<'_, T> {
    /// Angle of the next sample.
    pub fn theta(&self) -> f64 {
        self.index as f64 * self.step
    }

    pub fn step(&self) -> f64 {
        self.step
    }
}

impl<T: Trig> Iterator for Sweep<'_, T> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let theta = self.theta();
        if theta > self.upper {
            return None;
        }
        self.index += 1;
        Some(phasor_sum::<T>(self.waves, theta))
    }
}

impl<T: Trig> FusedIterator for Sweep<'_, T> {}

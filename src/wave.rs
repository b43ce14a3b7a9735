// Wave and point types, plus the sources that hand waves to the sampler

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::fourier;

/// One rotating phasor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wave {
    pub amplitude: f64,
    pub frequency: f64,
    pub phase: f64, // radians
}

impl Wave {
    pub fn new(amplitude: f64, frequency: f64, phase: f64) -> Self {
        Self {
            amplitude,
            frequency,
            phase,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// egui_plot wants [x, y] pairs
impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// Anything that can hand over an ordered list of waves.
pub trait WaveSource {
    fn waves(&self) -> Result<Vec<Wave>>;
}

impl WaveSource for [Wave] {
    fn waves(&self) -> Result<Vec<Wave>> {
        Ok(self.to_vec())
    }
}

// Embedded wave set, the outline of a swallow
const SWALLOW: &str = include_str!("../assets/swallow.json");

#[derive(Deserialize)]
struct WaveSet {
    name: String,
    waves: Vec<Wave>,
}

/// The wave set compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinWaves;

impl WaveSource for BuiltinWaves {
    fn waves(&self) -> Result<Vec<Wave>> {
        let set: WaveSet = serde_json::from_str(SWALLOW)?;
        info!("Loaded wave set {:?} with {} waves", set.name, set.waves.len());
        Ok(set.waves)
    }
}

/// Waves fitted to a closed path with a discrete Fourier transform.
#[derive(Debug, Clone, Default)]
pub struct PathWaves {
    pub path: Vec<Point>,
}

impl PathWaves {
    pub fn new(path: Vec<Point>) -> Self {
        Self { path }
    }
}

impl WaveSource for PathWaves {
    fn waves(&self) -> Result<Vec<Wave>> {
        let waves = fourier::dft(&self.path);
        info!("Fitted {} waves to a {} point path", waves.len(), self.path.len());
        Ok(waves)
    }
}

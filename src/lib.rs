// Rebuilds a 2D curve from a sum of rotating phasors and plots it

pub mod error;
pub mod fourier;
pub mod gui;
#[cfg(not(target_arch = "wasm32"))]
pub mod logger;
pub mod sweep;
pub mod trig;
pub mod wave;

use error::Result;
use gui::Renderer;
use wave::{Point, WaveSource};

/// Waves in, curve out: fetch, sample the whole turn, then hand the points to the renderer.
pub fn plot<S, R>(source: &S, renderer: &mut R, title: &str) -> Result<()>
where
    S: WaveSource + ?Sized,
    R: Renderer + ?Sized,
{
    let waves = source.waves()?;
    let points: Vec<Point> = sweep::sweep(&waves)?.collect();
    renderer.render(&points, title)
}

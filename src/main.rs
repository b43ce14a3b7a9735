use phasor_curve::error::Result;
use phasor_curve::gui::{PlotConfig, PlotWindow, TITLE};
use phasor_curve::wave::BuiltinWaves;
use phasor_curve::{logger, plot};

fn main() -> Result<()> {
    logger::init();

    let mut window = PlotWindow::new(PlotConfig::default());
    plot(&BuiltinWaves, &mut window, TITLE)
}

// Renders the sampled curve in a native window
// Line through the points in order, one marker per point
// Called to in main

use eframe::{egui, App, CreationContext, NativeOptions};
use eframe::egui::Color32;
use egui_plot::{Line, MarkerShape, Plot, Points};
use log::info;

use crate::error::Result;
use crate::wave::Point;

pub const TITLE: &str = "Swift Logo";

/// Anything that can show a curve. The sampler never depends on which one.
pub trait Renderer {
    fn render(&mut self, points: &[Point], title: &str) -> Result<()>;
}

// Series colors come from colorous' Tableau palette
fn palette(index: usize) -> Color32 {
    let c = colorous::TABLEAU10[index % colorous::TABLEAU10.len()];
    Color32::from_rgb(c.r, c.g, c.b)
}

#[derive(Debug, Clone)]
pub struct PlotConfig {
    pub window_size: [f32; 2],
    pub line_width: f32,
    pub line_color: Color32,
    pub marker_radius: f32,
    pub marker_color: Color32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            window_size: [800.0, 800.0],
            line_width: 1.5,
            line_color: palette(0),
            marker_radius: 3.0,
            marker_color: palette(1),
        }
    }
}

pub struct CurveApp {
    title: String,
    series: Vec<[f64; 2]>, // x,y pairs in sample order
    config: PlotConfig,
}

impl CurveApp {
    pub fn new(points: &[Point], title: &str, config: PlotConfig) -> Self {
        Self {
            title: title.to_string(),
            series: points.iter().map(|&p| p.into()).collect(),
            config,
        }
    }
}

impl App for CurveApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(self.title.as_str());

            // Equal axis scaling so circles stay circles
            Plot::new("phasor_curve")
                .data_aspect(1.0)
                .show(ui, |plot_ui| {
                    plot_ui.line(
                        Line::new(self.series.clone())
                            .color(self.config.line_color)
                            .width(self.config.line_width),
                    );
                    plot_ui.points(
                        Points::new(self.series.clone())
                            .shape(MarkerShape::Circle)
                            .radius(self.config.marker_radius)
                            .color(self.config.marker_color),
                    );
                });
        });
    }
}

/// eframe window, blocks until it is closed.
#[derive(Debug, Clone, Default)]
pub struct PlotWindow {
    config: PlotConfig,
}

impl PlotWindow {
    pub fn new(config: PlotConfig) -> Self {
        Self { config }
    }
}

impl Renderer for PlotWindow {
    fn render(&mut self, points: &[Point], title: &str) -> Result<()> {
        let native_options = NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(self.config.window_size)
                .with_title(title),
            ..Default::default()
        };
        let app = CurveApp::new(points, title, self.config.clone());

        info!("Opening plot window with {} points", points.len());
        eframe::run_native(
            title,
            native_options,
            Box::new(|_cc: &CreationContext| Ok(Box::new(app))),
        )?;
        info!("Plot window closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn app_keeps_sample_order() {
        let points = [Point::new(1.0, 0.0), Point::new(0.0, 1.0), Point::new(-1.0, 0.0)];
        let app = CurveApp::new(&points, TITLE, PlotConfig::default());
        assert_eq!(app.title, "Swift Logo");
        assert_eq!(app.series, vec![[1.0, 0.0], [0.0, 1.0], [-1.0, 0.0]]);
    }

    #[test]
    fn line_and_markers_use_different_colors() {
        let config = PlotConfig::default();
        assert_ne!(config.line_color, config.marker_color);
    }

    #[test]
    fn palette_wraps() {
        assert_eq!(palette(0), palette(colorous::TABLEAU10.len()));
    }
}

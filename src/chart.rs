//! SVG chart rendering for sweep curves.
//!
//! [`CurveChart`] owns exactly one chart output: it keeps the target path and
//! layout, and every [`CurveChart::update`] call tears down and redraws the
//! whole drawing area from the supplied curves. Callers hold one chart per
//! output file instead of juggling a mutable chart handle.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use plotters::prelude::*;

use crate::sweep::SpotCurves;

/// Chart layout settings.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChartConfig {
    #[cfg_attr(feature = "serde", serde(default = "default_width"))]
    pub width: u32,
    #[cfg_attr(feature = "serde", serde(default = "default_height"))]
    pub height: u32,
    #[cfg_attr(feature = "serde", serde(default = "default_caption"))]
    pub caption: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            caption: default_caption(),
        }
    }
}

fn default_width() -> u32 {
    1280
}

fn default_height() -> u32 {
    768
}

fn default_caption() -> String {
    "Option value vs spot".to_string()
}

/// Renders price/PnL (primary axis, currency) and delta (secondary axis)
/// against the swept spot grid into a single SVG file.
pub struct CurveChart {
    path: PathBuf,
    config: ChartConfig,
}

impl CurveChart {
    /// Chart writing to `path` with default layout.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::with_config(path, ChartConfig::default())
    }

    pub fn with_config(path: impl AsRef<Path>, config: ChartConfig) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            config,
        }
    }

    /// Output path of the rendered SVG.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Redraw the chart from the given curves, replacing any previous output.
    pub fn update(&self, curves: &SpotCurves) -> Result<()> {
        if curves.is_empty() {
            return Err(anyhow!("Cannot render chart from empty curves"));
        }

        let x_min = curves.spots[0];
        let x_max = curves.spots[curves.len() - 1];

        // Currency axis covers both the price and PnL series, with padding.
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for v in curves.prices.iter().chain(curves.pnls.iter()) {
            y_min = y_min.min(*v);
            y_max = y_max.max(*v);
        }
        let padding = (y_max - y_min).max(1e-6) * 0.05;
        let y_min = y_min - padding;
        let y_max = y_max + padding;

        let root = SVGBackend::new(&self.path, (self.config.width, self.config.height))
            .into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| anyhow!("Failed to clear chart area: {}", e))?;

        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .caption(&self.config.caption, ("sans-serif", 30))
            .x_label_area_size(40)
            .y_label_area_size(60)
            .right_y_label_area_size(50)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(|e| anyhow!("Failed to build chart axes: {}", e))?
            .set_secondary_coord(x_min..x_max, -1.05..1.05);

        chart
            .configure_mesh()
            .x_desc("Spot")
            .y_desc("Value ($)")
            .draw()
            .map_err(|e| anyhow!("Failed to draw chart mesh: {}", e))?;
        chart
            .configure_secondary_axes()
            .y_desc("Delta")
            .draw()
            .map_err(|e| anyhow!("Failed to draw secondary axis: {}", e))?;

        let price_line: Vec<(f64, f64)> = curves
            .spots
            .iter()
            .zip(curves.prices.iter())
            .map(|(&x, &y)| (x, y))
            .collect();
        let pnl_line: Vec<(f64, f64)> = curves
            .spots
            .iter()
            .zip(curves.pnls.iter())
            .map(|(&x, &y)| (x, y))
            .collect();
        let delta_line: Vec<(f64, f64)> = curves
            .spots
            .iter()
            .zip(curves.deltas.iter())
            .map(|(&x, &y)| (x, y))
            .collect();

        chart
            .draw_series(std::iter::once(PathElement::new(price_line, RED)))
            .map_err(|e| anyhow!("Failed to draw price series: {}", e))?
            .label("Price")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));
        chart
            .draw_series(std::iter::once(PathElement::new(pnl_line, GREEN)))
            .map_err(|e| anyhow!("Failed to draw PnL series: {}", e))?
            .label("PnL at expiry")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN));
        chart
            .draw_secondary_series(std::iter::once(PathElement::new(delta_line, BLUE)))
            .map_err(|e| anyhow!("Failed to draw delta series: {}", e))?
            .label("Delta")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

        chart
            .configure_series_labels()
            .border_style(BLACK)
            .background_style(WHITE.mix(0.8))
            .draw()
            .map_err(|e| anyhow!("Failed to draw chart legend: {}", e))?;

        root.present()
            .map_err(|e| anyhow!("Failed to write chart to {}: {}", self.path.display(), e))?;
        Ok(())
    }
}

use kurbo::{Affine, Point, Rect};

use crate::{chart::style::ChartStyle, foundation::error::FolioResult};

/// Data-to-pixel mapping shared by the static view and every frame.
///
/// The domain is computed once from all milestones so points keep their position while the
/// frame sequence reveals them.
#[derive(Clone, Debug)]
pub struct ChartLayout {
    canvas: Rect,
    plot: Rect,
    data_to_px: Affine,
    ticks: Vec<i32>,
}

impl ChartLayout {
    /// Build a layout for the given distinct years (ascending) and vertical offsets.
    pub fn new(style: &ChartStyle, years: &[i32], offsets: &[f64]) -> FolioResult<Self> {
        style.validate()?;

        let canvas = Rect::new(0.0, 0.0, f64::from(style.width), f64::from(style.height));
        let plot = Rect::new(
            style.margins.left,
            style.margins.top,
            canvas.x1 - style.margins.right - style.legend_width,
            canvas.y1 - style.margins.bottom,
        );

        let (x_min, x_max) = match (years.iter().min(), years.iter().max()) {
            (Some(lo), Some(hi)) => (f64::from(*lo) - 0.5, f64::from(*hi) + 0.5),
            _ => (0.0, 1.0),
        };

        let (y_lo, y_hi) = offsets
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
            .unwrap_or((0.0, 0.0));
        let pad = ((y_hi - y_lo) * 0.15).max(0.1);
        let (y_min, y_max) = (y_lo - pad, y_hi + pad);

        let sx = plot.width() / (x_max - x_min);
        let sy = plot.height() / (y_max - y_min);
        // y grows upwards in data space and downwards in pixel space.
        let data_to_px = Affine::new([sx, 0.0, 0.0, -sy, plot.x0 - x_min * sx, plot.y1 + y_min * sy]);

        let mut ticks = years.to_vec();
        ticks.sort_unstable();
        ticks.dedup();

        Ok(Self {
            canvas,
            plot,
            data_to_px,
            ticks,
        })
    }

    /// Pixel position of a data point.
    pub fn to_px(&self, year: i32, y: f64) -> Point {
        self.data_to_px * Point::new(f64::from(year), y)
    }

    /// Whole canvas.
    pub fn canvas(&self) -> Rect {
        self.canvas
    }

    /// Plot area inside the margins.
    pub fn plot(&self) -> Rect {
        self.plot
    }

    /// X tick years with their pixel x coordinate.
    pub fn ticks(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.ticks.iter().map(|&year| (year, self.to_px(year, 0.0).x))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chart/layout.rs"]
mod tests;

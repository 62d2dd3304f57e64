use crate::{
    foundation::color::Color,
    foundation::error::{FolioError, FolioResult},
};

/// Largest accepted canvas edge, in pixels.
pub const MAX_CANVAS_DIM: u32 = 8_192;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Space around the plot area in pixels.
pub struct Margins {
    /// Left margin.
    pub left: f64,
    /// Right margin.
    pub right: f64,
    /// Top margin (holds the title).
    pub top: f64,
    /// Bottom margin (holds tick labels).
    pub bottom: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            left: 20.0,
            right: 20.0,
            top: 50.0,
            bottom: 50.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Visual parameters of the timeline chart. Every field has a default.
pub struct ChartStyle {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Plot margins.
    pub margins: Margins,
    /// Width reserved on the right for the legend.
    pub legend_width: f64,
    /// Canvas fill; `None` leaves it transparent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    /// Font family list used for every text element.
    pub font_family: String,
    /// Title color.
    pub title_color: Color,
    /// Title font size.
    pub title_size: f64,
    /// Tick and point label color.
    pub text_color: Color,
    /// Tick and point label font size.
    pub text_size: f64,
    /// Legend text color.
    pub legend_color: Color,
    /// Legend font size.
    pub legend_size: f64,
    /// Marker diameter.
    pub marker_size: f64,
    /// Marker outline color.
    pub marker_outline: Color,
    /// Marker outline width.
    pub marker_outline_width: f64,
    /// Color of the line joining revealed milestones.
    pub trail_color: Color,
    /// Width of the line joining revealed milestones.
    pub trail_width: f64,
    /// Multiplier applied to every vertical offset.
    pub y_scale: f64,
    /// Offset between consecutive palette categories.
    pub category_step: f64,
    /// Offset between consecutive milestones of one category.
    pub item_step: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 960,
            height: 400,
            margins: Margins::default(),
            legend_width: 170.0,
            background: None,
            font_family: "Inter, sans-serif".to_owned(),
            title_color: Color::rgb(0xff, 0xff, 0xff),
            title_size: 18.0,
            text_color: Color::rgb(0xff, 0x69, 0xb4),
            text_size: 11.0,
            legend_color: Color::rgb(0xe5, 0xa0, 0xd7),
            legend_size: 11.0,
            marker_size: 12.0,
            marker_outline: Color::rgb(0x0d, 0x0d, 0x0d),
            marker_outline_width: 2.0,
            trail_color: Color::rgb(0x14, 0xb8, 0xa6),
            trail_width: 3.0,
            y_scale: 0.6,
            category_step: 0.3,
            item_step: 0.05,
        }
    }
}

impl ChartStyle {
    /// Validate dimensions and numeric parameters.
    pub fn validate(&self) -> FolioResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(FolioError::validation("chart width/height must be > 0"));
        }
        if self.width > MAX_CANVAS_DIM || self.height > MAX_CANVAS_DIM {
            return Err(FolioError::validation(format!(
                "chart size too large: {}x{} (max {MAX_CANVAS_DIM}x{MAX_CANVAS_DIM})",
                self.width, self.height
            )));
        }
        for (name, value) in [
            ("margins.left", self.margins.left),
            ("margins.right", self.margins.right),
            ("margins.top", self.margins.top),
            ("margins.bottom", self.margins.bottom),
            ("legend_width", self.legend_width),
            ("marker_outline_width", self.marker_outline_width),
            ("trail_width", self.trail_width),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(FolioError::validation(format!(
                    "chart {name} must be finite and >= 0"
                )));
            }
        }
        for (name, value) in [
            ("title_size", self.title_size),
            ("text_size", self.text_size),
            ("legend_size", self.legend_size),
            ("marker_size", self.marker_size),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(FolioError::validation(format!(
                    "chart {name} must be finite and > 0"
                )));
            }
        }
        for (name, value) in [
            ("y_scale", self.y_scale),
            ("category_step", self.category_step),
            ("item_step", self.item_step),
        ] {
            if !value.is_finite() {
                return Err(FolioError::validation(format!(
                    "chart {name} must be finite"
                )));
            }
        }

        let plot_w = f64::from(self.width)
            - self.margins.left
            - self.margins.right
            - self.legend_width;
        let plot_h = f64::from(self.height) - self.margins.top - self.margins.bottom;
        if plot_w <= 0.0 || plot_h <= 0.0 {
            return Err(FolioError::validation(
                "chart margins and legend leave no room for the plot area",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chart/style.rs"]
mod tests;

use std::fmt::Write as _;

use handlebars::html_escape;
use kurbo::Point;

use crate::{
    chart::{layout::ChartLayout, offsets::vertical_offsets, style::ChartStyle},
    foundation::color::Color,
    foundation::error::{FolioError, FolioResult},
    timeline::animator::{Frame, Timeline, hover_text},
    timeline::model::Milestone,
};

/// Renders the static view and the playback frames of a [`Timeline`] as standalone SVG.
pub struct ChartRenderer<'a> {
    timeline: &'a Timeline,
    style: &'a ChartStyle,
    title: &'a str,
    layout: ChartLayout,
    offsets: Vec<f64>,
}

impl<'a> ChartRenderer<'a> {
    /// Prepare offsets and layout for `timeline`.
    pub fn new(timeline: &'a Timeline, style: &'a ChartStyle, title: &'a str) -> FolioResult<Self> {
        let offsets = vertical_offsets(timeline.milestones(), timeline.palette(), style)?;
        let layout = ChartLayout::new(style, &timeline.years(), &offsets)?;
        Ok(Self {
            timeline,
            style,
            title,
            layout,
            offsets,
        })
    }

    /// Layout used for every SVG of this renderer.
    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    /// Grouped scatter: one marker group per category series with hover titles.
    #[tracing::instrument(skip_all)]
    pub fn render_static(&self) -> String {
        let mut out = String::new();
        self.open(&mut out, "static");
        for series in &self.timeline.static_view().series {
            let _ = writeln!(
                out,
                r#"<g class="series" data-category="{}">"#,
                html_escape(&series.category)
            );
            for point in &series.points {
                let p = self.point_px(point.order_index, point.year);
                self.marker(&mut out, p, series.color, Some(&series.hover_text(point)));
            }
            out.push_str("</g>\n");
        }
        self.close(&mut out);
        out
    }

    /// One playback frame: trail line, markers and labels for the revealed prefix.
    ///
    /// Fails when a milestone's category has no palette color, which [`Timeline::new`] rules out.
    pub fn render_frame(&self, frame: &Frame) -> FolioResult<String> {
        let mut out = String::new();
        self.open(&mut out, "frame");

        let pts: Vec<(Point, &Milestone)> = frame
            .milestones()
            .iter()
            .map(|m| (self.point_px(m.order_index, m.year), m))
            .collect();

        if pts.len() > 1 {
            let coords: Vec<String> = pts
                .iter()
                .map(|(p, _)| format!("{:.2},{:.2}", p.x, p.y))
                .collect();
            let _ = writeln!(
                out,
                r#"<polyline class="trail" points="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linejoin="round"/>"#,
                coords.join(" "),
                self.style.trail_color.to_css(),
                self.style.trail_width
            );
        }

        for (p, m) in &pts {
            let color = self
                .timeline
                .palette()
                .color_of(&m.category)
                .ok_or_else(|| FolioError::unknown_category(&m.category))?;
            let hover = hover_text(&m.label, m.year, &m.category);
            self.marker(&mut out, *p, color, Some(&hover));
            let _ = writeln!(
                out,
                r#"<text class="label" x="{:.2}" y="{:.2}" text-anchor="middle" fill="{}" font-size="{}">{}</text>"#,
                p.x,
                p.y - self.style.marker_size / 2.0 - 6.0,
                self.style.text_color.to_css(),
                self.style.text_size,
                html_escape(&m.label)
            );
        }

        self.close(&mut out);
        Ok(out)
    }

    /// Every frame, in playback order.
    #[tracing::instrument(skip_all, fields(frames = self.timeline.frames().len()))]
    pub fn render_frames(&self) -> FolioResult<Vec<String>> {
        self.timeline
            .frames()
            .iter()
            .map(|f| self.render_frame(f))
            .collect()
    }

    fn point_px(&self, order_index: usize, year: i32) -> Point {
        let y = self.offsets.get(order_index).copied().unwrap_or(0.0);
        self.layout.to_px(year, y)
    }

    fn open(&self, out: &mut String, kind: &str) {
        let canvas = self.layout.canvas();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" class="folio-chart folio-chart-{kind}" width="{w}" height="{h}" viewBox="0 0 {w} {h}" role="img" aria-label="{title}" font-family="{font}">"#,
            w = canvas.width(),
            h = canvas.height(),
            title = html_escape(self.title),
            font = html_escape(&self.style.font_family),
        );
        if let Some(bg) = self.style.background {
            let _ = writeln!(
                out,
                r#"<rect width="100%" height="100%" fill="{}"/>"#,
                bg.to_css()
            );
        }
        let _ = writeln!(
            out,
            r#"<text class="title" x="{:.2}" y="{:.2}" fill="{}" font-size="{}" font-weight="600">{}</text>"#,
            self.style.margins.left,
            self.style.margins.top / 2.0 + self.style.title_size / 3.0,
            self.style.title_color.to_css(),
            self.style.title_size,
            html_escape(self.title)
        );

        let tick_y = self.layout.plot().y1 + self.style.text_size + 10.0;
        for (year, x) in self.layout.ticks() {
            let _ = writeln!(
                out,
                r#"<text class="tick" x="{x:.2}" y="{tick_y:.2}" text-anchor="middle" fill="{}" font-size="{}">{year}</text>"#,
                self.style.text_color.to_css(),
                self.style.text_size
            );
        }

        self.legend(out);
    }

    fn legend(&self, out: &mut String) {
        let x = self.layout.plot().x1 + 24.0;
        let row = self.style.legend_size + 9.0;
        out.push_str("<g class=\"legend\">\n");
        for (i, series) in self.timeline.static_view().series.iter().enumerate() {
            let y = self.layout.plot().y0 + 10.0 + (i as f64) * row;
            let _ = writeln!(
                out,
                r#"<circle cx="{x:.2}" cy="{y:.2}" r="{:.2}" fill="{}"/><text x="{:.2}" y="{:.2}" fill="{}" font-size="{}">{}</text>"#,
                self.style.legend_size / 2.0,
                series.color.to_css(),
                x + self.style.legend_size,
                y + self.style.legend_size / 3.0,
                self.style.legend_color.to_css(),
                self.style.legend_size,
                html_escape(&series.category)
            );
        }
        out.push_str("</g>\n");
    }

    fn marker(&self, out: &mut String, p: Point, fill: Color, hover: Option<&str>) {
        let _ = write!(
            out,
            r#"<circle class="marker" cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}" stroke="{}" stroke-width="{}">"#,
            p.x,
            p.y,
            self.style.marker_size / 2.0,
            fill.to_css(),
            self.style.marker_outline.to_css(),
            self.style.marker_outline_width
        );
        if let Some(text) = hover {
            let _ = write!(out, "<title>{}</title>", html_escape(text));
        }
        out.push_str("</circle>\n");
    }

    fn close(&self, out: &mut String) {
        out.push_str("</svg>\n");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chart/svg.rs"]
mod tests;

use std::sync::Arc;

use serde::Serialize as _;

use crate::{
    foundation::color::Color,
    foundation::error::{FolioError, FolioResult},
    timeline::model::{CategoryPalette, Milestone, MilestoneDef},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// One point of a category series.
pub struct SeriesPoint {
    /// Calendar year.
    pub year: i32,
    /// Hover/annotation text.
    pub label: String,
    /// Position of the source milestone in the input sequence.
    pub order_index: usize,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// All milestones of one category, in input order.
pub struct CategorySeries {
    /// Category tag.
    pub category: String,
    /// Palette color.
    pub color: Color,
    /// Points in input order.
    pub points: Vec<SeriesPoint>,
}

impl CategorySeries {
    /// Hover text for a point of this series.
    pub fn hover_text(&self, point: &SeriesPoint) -> String {
        hover_text(&point.label, point.year, &self.category)
    }
}

pub(crate) fn hover_text(label: &str, year: i32, category: &str) -> String {
    format!("{label}\nYear: {year}\nCategory: {category}")
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
/// Static multi-series scatter grouped by category.
pub struct StaticView {
    /// Series in palette declaration order; categories without data are omitted.
    pub series: Vec<CategorySeries>,
}

impl StaticView {
    /// Total point count across all series.
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    /// `true` when there are no series.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Series for a category, if it has any points.
    pub fn series_for(&self, category: &str) -> Option<&CategorySeries> {
        self.series.iter().find(|s| s.category == category)
    }
}

/// Partition milestones into one series per category, in palette order.
///
/// Fails with [`FolioError::Config`] when a milestone names an undeclared category.
#[tracing::instrument(skip_all, fields(milestones = milestones.len(), categories = palette.len()))]
pub fn build_static_view(
    milestones: &[Milestone],
    palette: &CategoryPalette,
) -> FolioResult<StaticView> {
    ensure_known_categories(milestones, palette)?;

    let series: Vec<CategorySeries> = palette
        .iter()
        .filter_map(|(category, color)| {
            let points: Vec<SeriesPoint> = milestones
                .iter()
                .filter(|m| m.category == category)
                .map(|m| SeriesPoint {
                    year: m.year,
                    label: m.label.clone(),
                    order_index: m.order_index,
                })
                .collect();
            if points.is_empty() {
                return None;
            }
            Some(CategorySeries {
                category: category.to_owned(),
                color,
                points,
            })
        })
        .collect();

    tracing::debug!(series = series.len(), "built static view");
    Ok(StaticView { series })
}

/// Read-only prefix of the milestone sequence.
///
/// All frames of one sequence share a single milestone buffer.
#[derive(Clone, Debug)]
pub struct Frame {
    source: Arc<[Milestone]>,
    len: usize,
}

impl Frame {
    /// Milestones visible in this frame, in input order.
    pub fn milestones(&self) -> &[Milestone] {
        &self.source[..self.len]
    }

    /// Number of visible milestones.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false` for frames produced by [`build_frame_sequence`].
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The milestone this frame reveals.
    pub fn newest(&self) -> Option<&Milestone> {
        self.milestones().last()
    }
}

impl PartialEq for Frame {
    fn eq(&self, other: &Self) -> bool {
        self.milestones() == other.milestones()
    }
}

impl serde::Serialize for Frame {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.milestones().serialize(serializer)
    }
}

/// Build the N prefix frames of `milestones`; frame `i` (1-based) shows the first `i` entries.
#[tracing::instrument(skip_all, fields(milestones = milestones.len()))]
pub fn build_frame_sequence(milestones: &[Milestone]) -> Vec<Frame> {
    if milestones.is_empty() {
        return Vec::new();
    }
    let source: Arc<[Milestone]> = Arc::from(milestones);
    (1..=source.len())
        .map(|len| Frame {
            source: Arc::clone(&source),
            len,
        })
        .collect()
}

fn ensure_known_categories(
    milestones: &[Milestone],
    palette: &CategoryPalette,
) -> FolioResult<()> {
    match milestones.iter().find(|m| !palette.contains(&m.category)) {
        Some(m) => Err(FolioError::unknown_category(&m.category)),
        None => Ok(()),
    }
}

/// Milestones, palette and everything derived from them, built once.
#[derive(Clone, Debug)]
pub struct Timeline {
    milestones: Vec<Milestone>,
    palette: CategoryPalette,
    static_view: StaticView,
    frames: Vec<Frame>,
}

impl Timeline {
    /// Validate categories and derive the static view and frame sequence.
    ///
    /// Every milestone's `order_index` must equal its position in `milestones`.
    pub fn new(milestones: Vec<Milestone>, palette: CategoryPalette) -> FolioResult<Self> {
        if let Some((pos, m)) = milestones
            .iter()
            .enumerate()
            .find(|(pos, m)| m.order_index != *pos)
        {
            return Err(FolioError::validation(format!(
                "milestone '{}' has order_index {} but sits at position {pos}",
                m.label, m.order_index
            )));
        }
        let static_view = build_static_view(&milestones, &palette)?;
        let frames = build_frame_sequence(&milestones);
        Ok(Self {
            milestones,
            palette,
            static_view,
            frames,
        })
    }

    /// Like [`Timeline::new`], assigning `order_index` from input position.
    pub fn from_defs(
        defs: impl IntoIterator<Item = MilestoneDef>,
        palette: CategoryPalette,
    ) -> FolioResult<Self> {
        Self::new(Milestone::sequence(defs), palette)
    }

    /// Milestones in input order.
    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    /// Category palette.
    pub fn palette(&self) -> &CategoryPalette {
        &self.palette
    }

    /// Grouped static scatter.
    pub fn static_view(&self) -> &StaticView {
        &self.static_view
    }

    /// Prefix frames for playback.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Distinct years in ascending order.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.milestones.iter().map(|m| m.year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }
}

impl serde::Serialize for Timeline {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        #[derive(serde::Serialize)]
        struct Repr<'a> {
            series: &'a [CategorySeries],
            frames: &'a [Frame],
        }

        Repr {
            series: &self.static_view.series,
            frames: &self.frames,
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/animator.rs"]
mod tests;

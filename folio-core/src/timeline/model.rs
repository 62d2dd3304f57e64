use indexmap::IndexMap;

use crate::foundation::color::Color;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One timeline row as written in the site configuration.
pub struct MilestoneDef {
    /// Calendar year plotted on the x axis.
    pub year: i32,
    /// Display label (hover and annotation text).
    pub label: String,
    /// Category tag; must be declared by the palette.
    pub category: String,
    /// Optional explicit vertical offset, before `y_scale` is applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_offset: Option<f64>,
}

impl MilestoneDef {
    /// Row without an explicit vertical offset.
    pub fn new(year: i32, label: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            year,
            label: label.into(),
            category: category.into(),
            y_offset: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// A dated, labeled, categorized timeline entry.
///
/// `order_index` is the entry's position in the input sequence. Milestones are never re-sorted
/// by year: input order drives both grouping stability and the frame reveal order.
pub struct Milestone {
    /// Calendar year.
    pub year: i32,
    /// Display label.
    pub label: String,
    /// Category tag.
    pub category: String,
    /// Position in the input sequence (0-based).
    pub order_index: usize,
    /// Explicit vertical offset hint carried over from the definition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_offset: Option<f64>,
}

impl Milestone {
    /// Assign `order_index` from input position.
    pub fn sequence(defs: impl IntoIterator<Item = MilestoneDef>) -> Vec<Milestone> {
        defs.into_iter()
            .enumerate()
            .map(|(order_index, d)| Milestone {
                year: d.year,
                label: d.label,
                category: d.category,
                order_index,
                y_offset: d.y_offset,
            })
            .collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// Category tag to display color, iterated in declaration order.
///
/// Declaration order is the legend order; it is never sorted.
pub struct CategoryPalette {
    entries: IndexMap<String, Color>,
}

impl CategoryPalette {
    /// Empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, category: impl Into<String>, color: Color) -> Self {
        self.insert(category, color);
        self
    }

    /// Declare a category. Re-declaring keeps the original position and replaces the color.
    pub fn insert(&mut self, category: impl Into<String>, color: Color) {
        self.entries.insert(category.into(), color);
    }

    /// Color for a category, if declared.
    pub fn color_of(&self, category: &str) -> Option<Color> {
        self.entries.get(category).copied()
    }

    /// Declaration position of a category, if declared.
    pub fn rank_of(&self, category: &str) -> Option<usize> {
        self.entries.get_index_of(category)
    }

    /// Whether the category is declared.
    pub fn contains(&self, category: &str) -> bool {
        self.entries.contains_key(category)
    }

    /// Categories and colors in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Color)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of declared categories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no category is declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/model.rs"]
mod tests;

use crate::{
    chart::style::ChartStyle,
    foundation::error::{FolioError, FolioResult},
    timeline::model::{CategoryPalette, Milestone},
};

/// Vertical position of every milestone, indexed like the input slice.
///
/// An explicit `y_offset` wins. Otherwise the offset is
/// `rank(category) * category_step + index_within_category * item_step`, where rank is the
/// palette declaration position. Every value is multiplied by `y_scale`.
pub fn vertical_offsets(
    milestones: &[Milestone],
    palette: &CategoryPalette,
    style: &ChartStyle,
) -> FolioResult<Vec<f64>> {
    let mut seen_per_category = vec![0usize; palette.len()];
    milestones
        .iter()
        .map(|m| {
            let rank = palette
                .rank_of(&m.category)
                .ok_or_else(|| FolioError::unknown_category(&m.category))?;
            let within = seen_per_category[rank];
            seen_per_category[rank] += 1;

            let raw = m.y_offset.unwrap_or(
                (rank as f64) * style.category_step + (within as f64) * style.item_step,
            );
            Ok(raw * style.y_scale)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/chart/offsets.rs"]
mod tests;

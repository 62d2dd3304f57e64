use super::*;

fn layout() -> ChartLayout {
    ChartLayout::new(
        &ChartStyle::default(),
        &[2022, 2024, 2025],
        &[0.0, 0.03, 0.18, 0.27, 0.36],
    )
    .unwrap()
}

#[test]
fn plot_area_respects_margins_and_legend() {
    let l = layout();
    let style = ChartStyle::default();
    assert_eq!(l.plot().x0, 20.0);
    assert_eq!(l.plot().y0, 50.0);
    assert_eq!(l.plot().x1, 960.0 - 20.0 - style.legend_width);
    assert_eq!(l.plot().y1, 350.0);
    assert_eq!(l.canvas().width(), 960.0);
}

#[test]
fn points_stay_inside_plot_and_keep_orientation() {
    let l = layout();
    let plot = l.plot();
    let first = l.to_px(2022, 0.0);
    let last = l.to_px(2025, 0.36);
    for p in [first, last] {
        assert!(plot.contains(p), "{p:?} outside {plot:?}");
    }
    assert!(last.x > first.x);
    assert!(last.y < first.y, "higher offsets are drawn higher up");
}

#[test]
fn ticks_are_sorted_distinct_years() {
    let l = ChartLayout::new(&ChartStyle::default(), &[2025, 2022, 2025], &[0.0]).unwrap();
    let years: Vec<i32> = l.ticks().map(|(y, _)| y).collect();
    assert_eq!(years, [2022, 2025]);
    let xs: Vec<f64> = l.ticks().map(|(_, x)| x).collect();
    assert!(xs[0] < xs[1]);
}

#[test]
fn empty_data_still_builds() {
    let l = ChartLayout::new(&ChartStyle::default(), &[], &[]).unwrap();
    assert_eq!(l.ticks().count(), 0);
    let p = l.to_px(0, 0.0);
    assert!(p.x.is_finite() && p.y.is_finite());
}

#[test]
fn single_year_is_centered() {
    let l = ChartLayout::new(&ChartStyle::default(), &[2024], &[0.0]).unwrap();
    let p = l.to_px(2024, 0.0);
    let plot = l.plot();
    assert!((p.x - (plot.x0 + plot.x1) / 2.0).abs() < 1e-9);
    assert!((p.y - (plot.y0 + plot.y1) / 2.0).abs() < 1e-9);
}

use super::*;

fn palette() -> CategoryPalette {
    CategoryPalette::new()
        .with("Education", Color::rgb(0x4f, 0x46, 0xe5))
        .with("Internship", Color::rgb(0xfc, 0xd3, 0x92))
        .with("Work Experience", Color::rgb(0x10, 0xb9, 0x81))
}

fn sample() -> Vec<Milestone> {
    Milestone::sequence([
        MilestoneDef::new(2022, "A", "Education"),
        MilestoneDef::new(2024, "B", "Education"),
        MilestoneDef::new(2024, "C", "Internship"),
    ])
}

fn labels(ms: &[Milestone]) -> Vec<&str> {
    ms.iter().map(|m| m.label.as_str()).collect()
}

#[test]
fn frames_are_growing_prefixes() {
    let ms = sample();
    let frames = build_frame_sequence(&ms);
    assert_eq!(frames.len(), 3);
    assert_eq!(labels(frames[0].milestones()), ["A"]);
    assert_eq!(labels(frames[1].milestones()), ["A", "B"]);
    assert_eq!(labels(frames[2].milestones()), ["A", "B", "C"]);
    assert_eq!(frames[2].milestones(), ms.as_slice());
}

#[test]
fn prefix_law_holds_for_every_length() {
    for n in 0..12 {
        let ms = Milestone::sequence(
            (0..n).map(|i| MilestoneDef::new(2030 - i as i32, format!("m{i}"), "Education")),
        );
        let frames = build_frame_sequence(&ms);
        assert_eq!(frames.len(), n);
        for (i, f) in frames.iter().enumerate() {
            assert_eq!(f.len(), i + 1);
            assert!(!f.is_empty());
            assert_eq!(f.milestones(), &ms[..=i]);
            if i > 0 {
                assert!(f.milestones().starts_with(frames[i - 1].milestones()));
            }
        }
    }
}

#[test]
fn first_frame_follows_input_order_not_year() {
    let ms = Milestone::sequence([
        MilestoneDef::new(2025, "newest", "Education"),
        MilestoneDef::new(2020, "oldest", "Education"),
    ]);
    let frames = build_frame_sequence(&ms);
    assert_eq!(labels(frames[0].milestones()), ["newest"]);
    assert_eq!(frames[1].newest().map(|m| m.label.as_str()), Some("oldest"));
}

#[test]
fn empty_input_yields_nothing() {
    assert!(build_frame_sequence(&[]).is_empty());
    let view = build_static_view(&[], &palette()).unwrap();
    assert!(view.is_empty());
    assert_eq!(view.point_count(), 0);
}

#[test]
fn static_view_groups_in_palette_order() {
    let view = build_static_view(&sample(), &palette()).unwrap();
    let cats: Vec<&str> = view.series.iter().map(|s| s.category.as_str()).collect();
    assert_eq!(cats, ["Education", "Internship"]);

    let edu = view.series_for("Education").unwrap();
    let edu_labels: Vec<&str> = edu.points.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(edu_labels, ["A", "B"]);
    assert_eq!(edu.color, Color::rgb(0x4f, 0x46, 0xe5));

    assert!(view.series_for("Work Experience").is_none());
    assert_eq!(view.point_count(), 3);
}

#[test]
fn static_view_partition_is_lossless_and_stable() {
    let cats = ["Work Experience", "Education", "Internship"];
    let ms = Milestone::sequence(
        (0..17).map(|i| MilestoneDef::new(2000 + (i * 7 % 5), format!("m{i}"), cats[i as usize % 3])),
    );
    let view = build_static_view(&ms, &palette()).unwrap();
    assert_eq!(view.point_count(), ms.len());

    let mut seen: Vec<usize> = Vec::new();
    for s in &view.series {
        let idx: Vec<usize> = s.points.iter().map(|p| p.order_index).collect();
        assert!(idx.windows(2).all(|w| w[0] < w[1]), "{} not stable", s.category);
        seen.extend(idx);
    }
    seen.sort_unstable();
    assert_eq!(seen, (0..ms.len()).collect::<Vec<_>>());
}

#[test]
fn unknown_category_fails_fast() {
    let ms = Milestone::sequence([MilestoneDef::new(2023, "X", "Hobby")]);
    let err = build_static_view(&ms, &palette()).unwrap_err();
    assert!(matches!(err, FolioError::Config(_)));
    assert!(err.to_string().contains("unknown category 'Hobby'"));

    assert!(Timeline::new(ms, palette()).is_err());
}

#[test]
fn hover_text_lists_label_year_and_category() {
    let view = build_static_view(&sample(), &palette()).unwrap();
    let s = view.series_for("Internship").unwrap();
    assert_eq!(s.hover_text(&s.points[0]), "C\nYear: 2024\nCategory: Internship");
}

#[test]
fn timeline_exposes_years_and_serializes_series_and_frames() {
    let tl = Timeline::from_defs(
        [
            MilestoneDef::new(2022, "A", "Education"),
            MilestoneDef::new(2024, "B", "Education"),
            MilestoneDef::new(2024, "C", "Internship"),
        ],
        palette(),
    )
    .unwrap();
    assert_eq!(tl.years(), [2022, 2024]);
    assert_eq!(tl.frames().len(), 3);

    let v = serde_json::to_value(&tl).unwrap();
    assert_eq!(v["series"][0]["category"], "Education");
    assert_eq!(v["series"][0]["color"], "#4f46e5");
    assert_eq!(v["series"][1]["points"][0]["label"], "C");
    assert_eq!(v["frames"].as_array().unwrap().len(), 3);
    assert_eq!(v["frames"][1].as_array().unwrap().len(), 2);
    assert_eq!(v["frames"][2][2]["category"], "Internship");
}

#[test]
fn timeline_rejects_order_index_out_of_position() {
    let mut ms = sample();
    ms.swap(0, 1);
    let err = Timeline::new(ms, palette()).unwrap_err();
    assert!(matches!(err, FolioError::Validation(_)));
    assert!(err.to_string().contains("order_index"));

    assert!(Timeline::new(sample(), palette()).is_ok());
}

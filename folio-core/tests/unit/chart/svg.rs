use super::*;
use crate::timeline::model::{CategoryPalette, MilestoneDef};

fn palette() -> CategoryPalette {
    CategoryPalette::new()
        .with("Education", Color::rgb(0x4f, 0x46, 0xe5))
        .with("Internship", Color::rgb(0xfc, 0xd3, 0x92))
        .with("Work Experience", Color::rgb(0x10, 0xb9, 0x81))
}

fn timeline() -> Timeline {
    Timeline::from_defs(
        [
            MilestoneDef::new(2022, "BCA", "Education"),
            MilestoneDef::new(2024, "MSc", "Education"),
            MilestoneDef::new(2024, "Intern & Co", "Internship"),
        ],
        palette(),
    )
    .unwrap()
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn static_view_has_one_group_per_series_in_palette_order() {
    let tl = timeline();
    let style = ChartStyle::default();
    let r = ChartRenderer::new(&tl, &style, "Timeline").unwrap();
    let svg = r.render_static();

    assert_eq!(count(&svg, "class=\"series\""), 2);
    let edu = svg.find("data-category=\"Education\"").unwrap();
    let intern = svg.find("data-category=\"Internship\"").unwrap();
    assert!(edu < intern);
    assert!(!svg.contains("data-category=\"Work Experience\""));
    assert_eq!(count(&svg, "class=\"marker\""), 3);
    assert!(svg.contains("<title>BCA\nYear: 2022\nCategory: Education</title>"));
}

#[test]
fn frames_reveal_prefixes_with_trail() {
    let tl = timeline();
    let style = ChartStyle::default();
    let r = ChartRenderer::new(&tl, &style, "Timeline").unwrap();
    let frames = r.render_frames().unwrap();
    assert_eq!(frames.len(), 3);

    for (i, svg) in frames.iter().enumerate() {
        assert_eq!(count(svg, "class=\"marker\""), i + 1);
        assert_eq!(count(svg, "class=\"label\""), i + 1);
    }
    assert!(!frames[0].contains("class=\"trail\""));
    assert!(frames[2].contains("stroke=\"#14b8a6\""));
}

#[test]
fn text_is_escaped() {
    let tl = timeline();
    let style = ChartStyle::default();
    let r = ChartRenderer::new(&tl, &style, "Work <& Study>").unwrap();
    let svg = r.render_frame(&tl.frames()[2]).unwrap();
    assert!(svg.contains("Intern &amp; Co"));
    assert!(svg.contains("Work &lt;&amp; Study&gt;"));
    assert!(!svg.contains("Intern & Co"));
}

#[test]
fn ticks_and_legend_follow_data() {
    let tl = timeline();
    let style = ChartStyle::default();
    let svg = ChartRenderer::new(&tl, &style, "T").unwrap().render_static();
    assert_eq!(count(&svg, "class=\"tick\""), 2);
    assert!(svg.contains(">2022</text>"));
    assert!(svg.contains(">2024</text>"));
    assert!(svg.contains(">Internship</text>"));
}

#[test]
fn background_is_optional() {
    let tl = timeline();
    let style = ChartStyle::default();
    let svg = ChartRenderer::new(&tl, &style, "T").unwrap().render_static();
    assert!(!svg.contains("<rect"));

    let style = ChartStyle {
        background: Some(Color::rgb(0x0d, 0x11, 0x17)),
        ..ChartStyle::default()
    };
    let svg = ChartRenderer::new(&tl, &style, "T").unwrap().render_static();
    assert!(svg.contains(r##"<rect width="100%" height="100%" fill="#0d1117"/>"##));
}

#[test]
fn empty_timeline_renders_frame_free_chart() {
    let tl = Timeline::from_defs(Vec::new(), palette()).unwrap();
    let style = ChartStyle::default();
    let r = ChartRenderer::new(&tl, &style, "Nothing yet").unwrap();
    assert!(r.render_frames().unwrap().is_empty());
    let svg = r.render_static();
    assert_eq!(count(&svg, "class=\"marker\""), 0);
    assert!(svg.starts_with("<svg"));
}

#[test]
fn output_parses_as_svg() {
    let tl = timeline();
    let style = ChartStyle::default();
    let r = ChartRenderer::new(&tl, &style, "Timeline").unwrap();
    let opts = usvg::Options::default();
    usvg::Tree::from_str(&r.render_static(), &opts).unwrap();
    for svg in r.render_frames().unwrap() {
        let tree = usvg::Tree::from_str(&svg, &opts).unwrap();
        assert_eq!(tree.size().width(), 960.0);
    }
}

#[test]
fn frame_and_static_share_hover_text() {
    let tl = timeline();
    let style = ChartStyle::default();
    let r = ChartRenderer::new(&tl, &style, "T").unwrap();
    let hover = "<title>Intern &amp; Co\nYear: 2024\nCategory: Internship</title>";
    assert!(r.render_static().contains(hover));
    assert!(r.render_frame(&tl.frames()[2]).unwrap().contains(hover));
}

#[test]
fn frame_with_undeclared_category_is_rejected() {
    let tl = timeline();
    let style = ChartStyle::default();
    let r = ChartRenderer::new(&tl, &style, "T").unwrap();

    let other = Timeline::from_defs(
        [MilestoneDef::new(2023, "Marathon", "Hobby")],
        CategoryPalette::new().with("Hobby", Color::rgb(1, 2, 3)),
    )
    .unwrap();
    let err = r.render_frame(&other.frames()[0]).unwrap_err();
    assert!(err.to_string().contains("unknown category 'Hobby'"));
}

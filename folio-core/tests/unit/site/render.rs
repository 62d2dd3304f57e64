use super::*;
use crate::site::assets::resolve_assets;
use std::path::Path;

fn fixture() -> SiteConfig {
    SiteConfig::from_path("tests/data/site.json").unwrap()
}

fn placeholders(cfg: &SiteConfig) -> ResolvedAssets {
    resolve_assets(cfg, Path::new("target/render_unit/does-not-exist"))
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn page_contains_every_section() {
    let cfg = fixture();
    let tl = cfg.build_timeline().unwrap();
    let html = render_page(&cfg, &tl, &placeholders(&cfg), None).unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<div class=\"h1\">Jino Mathew M J</div>"));
    for heading in ["About", "Skills", "Projects", "Contact", "Highlights"] {
        assert!(
            html.contains(&format!("<div class=\"h2\">{heading}</div>")),
            "missing {heading}"
        );
    }
    assert_eq!(count(&html, "<span class=\"chip\">"), cfg.skills.len());
    assert_eq!(count(&html, "<article class=\"project\">"), 5);
    assert!(html.contains("--primary: #3b82f6;"));
}

#[test]
fn timeline_card_embeds_still_and_hidden_frames() {
    let cfg = fixture();
    let tl = cfg.build_timeline().unwrap();
    let html = render_page(&cfg, &tl, &placeholders(&cfg), None).unwrap();

    assert!(html.contains("data-frame-ms=\"800\""));
    assert!(html.contains("data-frame-count=\"5\""));
    assert!(html.contains("data-from-current=\"true\""));
    assert_eq!(count(&html, "class=\"folio-chart folio-chart-static\""), 1);
    assert_eq!(count(&html, "class=\"folio-chart folio-chart-frame\""), 5);
    assert_eq!(count(&html, "<div class=\"frame\" data-frame="), 5);
    assert!(html.contains("data-frame=\"4\" hidden>"));
    assert!(html.contains("▶ View Career Roadmap</button>"));
    assert!(!html.contains(" disabled>"));
}

#[test]
fn missing_files_render_placeholders() {
    let cfg = fixture();
    let tl = cfg.build_timeline().unwrap();
    let html = render_page(&cfg, &tl, &placeholders(&cfg), None).unwrap();

    assert!(html.contains("<div class=\"avatar\" aria-hidden=\"true\">JM</div>"));
    assert!(html.contains("<div class=\"alert\" role=\"alert\">"));
    assert!(html.contains("Resume file not found"));
    assert!(!html.contains("class=\"resume-btn\""));
}

#[test]
fn found_files_render_links() {
    let cfg = fixture();
    let tl = cfg.build_timeline().unwrap();
    let assets = ResolvedAssets {
        profile: ProfileImageState::Found {
            path: "profile.jpg".to_owned(),
            caption: "Jino Mathew M J".to_owned(),
        },
        resume: ResumeState::Available {
            path: "resume.pdf".to_owned(),
            file_name: "resume.pdf".to_owned(),
            label: "📄 Download Resume".to_owned(),
        },
    };
    let html = render_page(&cfg, &tl, &assets, None).unwrap();

    assert!(html.contains("<img src=\"profile.jpg\""));
    assert!(html.contains("class=\"resume-btn\""));
    assert!(html.contains("📄 Download Resume</a>"));
    assert!(!html.contains("role=\"alert\""));
}

#[test]
fn footer_year_override_wins() {
    let mut cfg = fixture();
    cfg.footer.year = Some(2024);
    let tl = cfg.build_timeline().unwrap();
    let assets = placeholders(&cfg);

    let html = render_page(&cfg, &tl, &assets, None).unwrap();
    assert!(html.contains("© 2024 Jino Mathew M J"));

    let html = render_page(&cfg, &tl, &assets, Some(2026)).unwrap();
    assert!(html.contains("© 2026 Jino Mathew M J"));

    cfg.footer.year = None;
    let html = render_page(&cfg, &tl, &assets, None).unwrap();
    assert!(html.contains("© Jino Mathew M J"));
}

#[test]
fn user_text_is_escaped() {
    let mut cfg = fixture();
    cfg.about = vec!["<script>alert(1)</script>".to_owned()];
    let tl = cfg.build_timeline().unwrap();
    let html = render_page(&cfg, &tl, &placeholders(&cfg), None).unwrap();
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!html.contains("<p><script>"));
}

#[test]
fn empty_timeline_disables_play_button() {
    let mut cfg = fixture();
    cfg.timeline.milestones.clear();
    let tl = cfg.build_timeline().unwrap();
    let html = render_page(&cfg, &tl, &placeholders(&cfg), None).unwrap();

    assert!(html.contains("data-frame-count=\"0\""));
    assert!(html.contains("class=\"play\" disabled>"));
    assert_eq!(count(&html, "<div class=\"frame\""), 0);
    assert_eq!(count(&html, "folio-chart-static"), 1);
}

#[test]
fn renderer_is_reusable() {
    let cfg = fixture();
    let tl = cfg.build_timeline().unwrap();
    let assets = placeholders(&cfg);
    let r = PageRenderer::new().unwrap();
    let a = r.render(&cfg, &tl, &assets, Some(2025)).unwrap();
    let b = r.render(&cfg, &tl, &assets, Some(2025)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn initials_take_first_two_words() {
    assert_eq!(initials("Jino Mathew M J"), "JM");
    assert_eq!(initials("ada"), "A");
    assert_eq!(initials("  "), "");
}

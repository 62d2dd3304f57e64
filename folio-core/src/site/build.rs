use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Datelike as _;

use crate::{
    foundation::error::FolioResult,
    site::assets::{ProfileImageState, ResumeState, resolve_assets},
    site::config::SiteConfig,
    site::render::PageRenderer,
};

#[derive(Clone, Debug, Default)]
/// Build-time overrides.
pub struct BuildOptions {
    /// Footer year; wins over `footer.year` from the configuration. With neither set the
    /// current local year is used.
    pub year: Option<i32>,
}

#[derive(Clone, Debug)]
/// Summary of a finished [`build_site`] run.
pub struct BuildReport {
    /// Written page.
    pub index_html: PathBuf,
    /// Written timeline data (grouped series and frames).
    pub timeline_json: PathBuf,
    /// Asset files copied into the output directory.
    pub copied: Vec<PathBuf>,
    /// Number of playback frames.
    pub frame_count: usize,
    /// Number of non-empty category series.
    pub series_count: usize,
    /// `true` when the page shows the missing-resume warning.
    pub resume_missing: bool,
    /// `true` when the page shows the profile placeholder.
    pub profile_placeholder: bool,
}

/// Validate `config`, render the page and write it with its data and assets to `out_dir`.
///
/// Asset paths are resolved against `root`.
#[tracing::instrument(skip_all, fields(root = %root.display(), out = %out_dir.display()))]
pub fn build_site(
    config: &SiteConfig,
    root: &Path,
    out_dir: &Path,
    opts: &BuildOptions,
) -> FolioResult<BuildReport> {
    config.validate()?;
    let timeline = config.build_timeline()?;
    let assets = resolve_assets(config, root);

    let year = opts
        .year
        .or(config.footer.year)
        .unwrap_or_else(|| chrono::Local::now().year());
    let html = PageRenderer::new()?.render(config, &timeline, &assets, Some(year))?;

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("create output dir '{}'", out_dir.display()))?;

    let index_html = out_dir.join("index.html");
    std::fs::write(&index_html, html)
        .with_context(|| format!("write '{}'", index_html.display()))?;

    let timeline_json = out_dir.join("timeline.json");
    let json = serde_json::to_string_pretty(&timeline)?;
    std::fs::write(&timeline_json, json)
        .with_context(|| format!("write '{}'", timeline_json.display()))?;

    let mut copied = Vec::new();
    for rel in assets.files_to_copy() {
        let src = root.join(rel);
        let dst = out_dir.join(rel);
        if same_file(&src, &dst)? {
            tracing::debug!(asset = rel, "asset already in place");
            continue;
        }
        if let Some(parent) = dst.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir '{}'", parent.display()))?;
        }
        std::fs::copy(&src, &dst)
            .with_context(|| format!("copy asset '{rel}' to '{}'", dst.display()))?;
        copied.push(dst);
    }

    let report = BuildReport {
        index_html,
        timeline_json,
        copied,
        frame_count: timeline.frames().len(),
        series_count: timeline.static_view().series.len(),
        resume_missing: matches!(assets.resume, ResumeState::Missing { .. }),
        profile_placeholder: matches!(assets.profile, ProfileImageState::Placeholder { .. }),
    };
    tracing::info!(
        frames = report.frame_count,
        series = report.series_count,
        copied = report.copied.len(),
        "site built"
    );
    Ok(report)
}

// Copying a file onto itself truncates it.
fn same_file(src: &Path, dst: &Path) -> FolioResult<bool> {
    if !dst.exists() {
        return Ok(false);
    }
    let src = src
        .canonicalize()
        .with_context(|| format!("resolve asset '{}'", src.display()))?;
    let dst = dst
        .canonicalize()
        .with_context(|| format!("resolve '{}'", dst.display()))?;
    Ok(src == dst)
}

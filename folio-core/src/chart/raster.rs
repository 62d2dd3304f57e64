use std::{path::Path, sync::Arc};

use anyhow::Context as _;

use crate::{
    chart::style::MAX_CANVAS_DIM,
    foundation::color::Color,
    foundation::error::{FolioError, FolioResult},
};

/// Straight-alpha RGBA8 pixels of a rasterized chart.
#[derive(Clone, Debug)]
pub struct ChartImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA8 bytes (not premultiplied).
    pub data: Vec<u8>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Raster output controls.
pub struct RasterOptions {
    /// Uniform scale applied to the SVG's logical size.
    pub scale: f32,
    /// Fill painted before the chart; `None` keeps transparency.
    pub background: Option<Color>,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            background: None,
        }
    }
}

/// Rasterizes chart SVG with `resvg`. Cheap to clone; the font database is shared.
#[derive(Clone)]
pub struct ChartRasterizer {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl ChartRasterizer {
    /// Rasterizer with system fonts loaded.
    pub fn new() -> Self {
        Self::with_font_dirs(&[])
    }

    /// Rasterizer with system fonts plus every `.ttf`/`.otf`/`.ttc` file found in `dirs`.
    pub fn with_font_dirs(dirs: &[&Path]) -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        for dir in dirs {
            load_fonts_from_dir(&mut db, dir);
        }
        tracing::debug!(faces = db.len(), "loaded chart fonts");
        Self {
            fontdb: Arc::new(db),
        }
    }

    /// Number of font faces available to chart text.
    pub fn font_face_count(&self) -> usize {
        self.fontdb.len()
    }

    /// Parse and render `svg` into straight-alpha RGBA8.
    pub fn rasterize(&self, svg: &str, opts: RasterOptions) -> FolioResult<ChartImage> {
        let usvg_opts = usvg::Options {
            fontdb: Arc::clone(&self.fontdb),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(svg, &usvg_opts).context("parse chart svg")?;

        if !opts.scale.is_finite() || opts.scale <= 0.0 {
            return Err(FolioError::validation("raster scale must be finite and > 0"));
        }
        let width = to_px(tree.size().width() * opts.scale)?;
        let height = to_px(tree.size().height() * opts.scale)?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| FolioError::render("failed to allocate chart pixmap"))?;
        if let Some(bg) = opts.background {
            pixmap.fill(resvg::tiny_skia::Color::from_rgba8(bg.r, bg.g, bg.b, bg.a));
        }

        let xform = resvg::tiny_skia::Transform::from_scale(opts.scale, opts.scale);
        resvg::render(&tree, xform, &mut pixmap.as_mut());

        let mut data = pixmap.take();
        unpremultiply_rgba8_in_place(&mut data);
        Ok(ChartImage {
            width,
            height,
            data,
        })
    }

    /// Rasterize `svg` and write it as PNG, creating parent directories.
    #[tracing::instrument(skip_all, fields(path = %path.display()))]
    pub fn write_png(&self, svg: &str, path: &Path, opts: RasterOptions) -> FolioResult<()> {
        let img = self.rasterize(svg, opts)?;
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        image::save_buffer_with_format(
            path,
            &img.data,
            img.width,
            img.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

impl Default for ChartRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ChartRasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartRasterizer")
            .field("font_faces", &self.fontdb.len())
            .finish()
    }
}

fn to_px(v: f32) -> FolioResult<u32> {
    if !v.is_finite() || v <= 0.0 {
        return Err(FolioError::render("chart svg has invalid width/height"));
    }
    let px = (v.ceil() as u32).max(1);
    if px > MAX_CANVAS_DIM {
        return Err(FolioError::render(format!(
            "chart raster size too large: {px} (max {MAX_CANVAS_DIM})"
        )));
    }
    Ok(px)
}

fn load_fonts_from_dir(db: &mut usvg::fontdb::Database, dir: &Path) {
    let Ok(rd) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in rd.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        let ext = ext.to_ascii_lowercase();
        if ext != "ttf" && ext != "otf" && ext != "ttc" {
            continue;
        }
        let _ = db.load_font_file(&path);
    }
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chart/raster.rs"]
mod tests;

//! Folio generates a static portfolio page around an animated milestone timeline.
//!
//! A site is described by one JSON [`SiteConfig`]. The build turns its ordered milestones into
//! a [`Timeline`] and renders the page around it.
//!
//! # Pipeline overview
//!
//! 1. **Animate**: `[Milestone] -> StaticView + [Frame]` (grouped series and prefix frames)
//! 2. **Chart**: `Timeline + ChartStyle -> SVG` (static view and one SVG per frame)
//! 3. **Page**: `SiteConfig + Timeline + ResolvedAssets -> index.html` (handlebars)
//! 4. **Raster** (optional): chart SVG to PNG via `usvg`/`resvg`
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Input order is the truth**: milestones are never re-sorted by year; frame `i` is the
//!   first `i` milestones as entered.
//! - **Built once**: the timeline is derived eagerly from the configuration and never mutated.
//! - **Missing files degrade**: a missing profile image or resume becomes a placeholder, never
//!   an error.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod chart;
mod foundation;
mod playback;
mod site;
mod timeline;

pub use chart::layout::ChartLayout;
pub use chart::offsets::vertical_offsets;
pub use chart::raster::{ChartImage, ChartRasterizer, RasterOptions};
pub use chart::style::{ChartStyle, MAX_CANVAS_DIM, Margins};
pub use chart::svg::ChartRenderer;
pub use foundation::color::Color;
pub use foundation::error::{FolioError, FolioResult};
pub use playback::player::{FramePlayer, PlaybackSettings, PlayerState};
pub use site::assets::{ProfileImageState, ResolvedAssets, ResumeState, resolve_assets};
pub use site::build::{BuildOptions, BuildReport, build_site};
pub use site::config::{
    Contact, Footer, PageMeta, Profile, ProfileImage, Project, ResumeConfig, SiteConfig,
    SocialLink, Theme, TimelineConfig,
};
pub use site::render::{PageRenderer, render_page};
pub use timeline::animator::{
    CategorySeries, Frame, SeriesPoint, StaticView, Timeline, build_frame_sequence,
    build_static_view,
};
pub use timeline::model::{CategoryPalette, Milestone, MilestoneDef};

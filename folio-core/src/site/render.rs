use handlebars::Handlebars;
use serde_json::json;

use crate::{
    chart::svg::ChartRenderer,
    foundation::error::FolioResult,
    site::assets::{ProfileImageState, ResolvedAssets, ResumeState},
    site::config::SiteConfig,
    site::templates,
    timeline::animator::Timeline,
};

/// Handlebars registry holding the page template and its partials.
pub struct PageRenderer {
    registry: Handlebars<'static>,
}

impl PageRenderer {
    /// Register the built-in templates.
    pub fn new() -> FolioResult<Self> {
        let mut registry = Handlebars::new();
        registry.register_partial("style", templates::STYLE_TEMPLATE)?;
        registry.register_partial("timeline", templates::TIMELINE_PARTIAL)?;
        registry.register_partial("playback_script", templates::PLAYBACK_SCRIPT)?;
        registry.register_template_string("page", templates::PAGE_TEMPLATE)?;
        Ok(Self { registry })
    }

    /// Render `index.html`. `year` overrides the configured footer year.
    #[tracing::instrument(skip_all, fields(frames = timeline.frames().len()))]
    pub fn render(
        &self,
        config: &SiteConfig,
        timeline: &Timeline,
        assets: &ResolvedAssets,
        year: Option<i32>,
    ) -> FolioResult<String> {
        let chart = ChartRenderer::new(timeline, &config.timeline.chart, &config.timeline.title)?;
        let static_svg = chart.render_static();
        let frames = chart.render_frames()?;

        let image = match &assets.profile {
            ProfileImageState::Found { path, caption } => json!({
                "found": true,
                "src": path,
                "caption": caption,
            }),
            ProfileImageState::Placeholder { caption } => json!({
                "found": false,
                "caption": caption,
                "initials": initials(&config.profile.name),
            }),
        };

        let resume = match &assets.resume {
            ResumeState::Available {
                path,
                file_name,
                label,
            } => json!({
                "available": true,
                "href": path,
                "file_name": file_name,
                "label": label,
            }),
            ResumeState::Missing { message } => json!({
                "available": false,
                "message": message,
            }),
        };

        let theme = &config.theme;
        let data = json!({
            "page": &config.page,
            "theme": {
                "primary": theme.primary.to_css(),
                "accent": theme.accent.to_css(),
                "bg": theme.bg.to_css(),
                "text": theme.text.to_css(),
                "muted": theme.muted.to_css(),
                "card": theme.card.to_css(),
                "border": theme.border.to_css(),
            },
            "profile": &config.profile,
            "socials": &config.socials,
            "image": image,
            "about": &config.about,
            "skills": &config.skills,
            "projects": &config.projects,
            "contact": &config.contact,
            "resume": resume,
            "highlights": &config.highlights,
            "footer": {
                "year": year.or(config.footer.year),
                "owner": config.footer_owner(),
                "credit": &config.footer.credit,
            },
            "timeline": {
                "static_svg": static_svg,
                "has_frames": !frames.is_empty(),
                "frame_count": frames.len(),
                "frames": frames,
                "frame_ms": config.timeline.playback.frame_ms,
                "from_current": config.timeline.playback.from_current,
                "button_label": &config.timeline.playback.button_label,
            },
        });

        Ok(self.registry.render("page", &data)?)
    }
}

/// Render `index.html` with a one-shot [`PageRenderer`].
pub fn render_page(
    config: &SiteConfig,
    timeline: &Timeline,
    assets: &ResolvedAssets,
    year: Option<i32>,
) -> FolioResult<String> {
    PageRenderer::new()?.render(config, timeline, assets, year)
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/site/render.rs"]
mod tests;

use std::{fs::File, io::BufReader, path::Path};

use crate::{
    chart::style::ChartStyle,
    foundation::color::Color,
    foundation::error::{FolioError, FolioResult},
    playback::player::PlaybackSettings,
    timeline::animator::Timeline,
    timeline::model::{CategoryPalette, MilestoneDef},
};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Everything needed to render the portfolio page.
///
/// Loaded once at startup (see [`SiteConfig::from_path`]) and passed by reference to the
/// rendering layer.
pub struct SiteConfig {
    /// Document metadata.
    pub page: PageMeta,
    /// Color theme.
    #[serde(default)]
    pub theme: Theme,
    /// Header content.
    pub profile: Profile,
    /// Social buttons under the header.
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    /// About paragraph(s).
    #[serde(default)]
    pub about: Vec<String>,
    /// Skill chips.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Project cards.
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Contact panel.
    #[serde(default)]
    pub contact: Contact,
    /// Resume download.
    #[serde(default)]
    pub resume: ResumeConfig,
    /// Highlights list.
    #[serde(default)]
    pub highlights: Vec<String>,
    /// Footer line.
    #[serde(default)]
    pub footer: Footer,
    /// Animated timeline.
    pub timeline: TimelineConfig,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// `<head>` metadata.
pub struct PageMeta {
    /// Document title.
    pub title: String,
    /// Emoji favicon.
    #[serde(default = "default_icon")]
    pub icon: String,
    /// `lang` attribute.
    #[serde(default = "default_lang")]
    pub lang: String,
}

fn default_icon() -> String {
    "🚀".to_owned()
}

fn default_lang() -> String {
    "en".to_owned()
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Page color theme, emitted as CSS custom properties.
pub struct Theme {
    /// Primary accent (tagline gradient start).
    pub primary: Color,
    /// Secondary accent (hover borders, gradient middle).
    pub accent: Color,
    /// Page background.
    pub bg: Color,
    /// Body text.
    pub text: Color,
    /// Muted text.
    pub muted: Color,
    /// Card background.
    pub card: Color,
    /// Card and divider border.
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::rgb(0x3b, 0x82, 0xf6),
            accent: Color::rgb(0x14, 0xb8, 0xa6),
            bg: Color::rgb(0x0d, 0x11, 0x17),
            text: Color::rgb(0xe6, 0xe6, 0xe6),
            muted: Color::rgb(0x9c, 0xa3, 0xaf),
            card: Color::rgb(0x11, 0x18, 0x27),
            border: Color::rgb(0x1f, 0x29, 0x37),
        }
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Header identity block.
pub struct Profile {
    /// Display name.
    pub name: String,
    /// Shimmering tagline.
    #[serde(default)]
    pub tagline: String,
    /// Short summary under the tagline.
    #[serde(default)]
    pub summary: String,
    /// Profile image candidates, tried in order. Empty means the built-in defaults.
    #[serde(default)]
    pub images: Vec<ProfileImage>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// One candidate profile picture.
pub struct ProfileImage {
    /// Path relative to the site root.
    pub path: String,
    /// Caption shown under the image; defaults to the profile name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl Profile {
    /// Candidates in lookup order: configured ones, or `profile.jpg` then `assets/profile.png`.
    pub fn image_candidates(&self) -> Vec<ProfileImage> {
        if !self.images.is_empty() {
            return self.images.clone();
        }
        vec![
            ProfileImage {
                path: "profile.jpg".to_owned(),
                caption: Some(self.name.clone()),
            },
            ProfileImage {
                path: "assets/profile.png".to_owned(),
                caption: Some("Profile Picture".to_owned()),
            },
        ]
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Social button.
pub struct SocialLink {
    /// Button text.
    pub label: String,
    /// Target URL (`https:`, `http:` or `mailto:`).
    pub url: String,
    /// Optional leading emoji.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Project card.
pub struct Project {
    /// Title line.
    pub title: String,
    /// Description paragraph.
    #[serde(default)]
    pub description: String,
    /// Technology pills.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Optional "View" link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
/// Contact panel lines.
pub struct Contact {
    /// City / country.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Profile URLs listed verbatim.
    #[serde(default)]
    pub links: Vec<String>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Resume download button.
pub struct ResumeConfig {
    /// Resume path relative to the site root.
    pub path: String,
    /// Button label.
    pub label: String,
    /// File name offered to the browser; defaults to the path's file name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_name: Option<String>,
}

impl Default for ResumeConfig {
    fn default() -> Self {
        Self {
            path: "resume.pdf".to_owned(),
            label: "📄 Download Resume".to_owned(),
            download_name: None,
        }
    }
}

impl ResumeConfig {
    /// File name used for the download attribute and the missing-file message.
    pub fn file_name(&self) -> String {
        self.download_name.clone().unwrap_or_else(|| {
            Path::new(&self.path)
                .file_name()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| self.path.clone())
        })
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Footer line.
pub struct Footer {
    /// Copyright owner; defaults to the profile name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Copyright year; omitted from the page when unset and not supplied at build time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Trailing credit text.
    #[serde(default = "default_credit")]
    pub credit: String,
}

fn default_credit() -> String {
    "Built with ❤️ & Rust".to_owned()
}

impl Default for Footer {
    fn default() -> Self {
        Self {
            owner: None,
            year: None,
            credit: default_credit(),
        }
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Timeline card configuration.
pub struct TimelineConfig {
    /// Chart title.
    pub title: String,
    /// Category colors in legend order.
    pub palette: CategoryPalette,
    /// Milestones in reveal order.
    #[serde(default)]
    pub milestones: Vec<MilestoneDef>,
    /// Playback behavior.
    #[serde(default)]
    pub playback: PlaybackSettings,
    /// Chart styling.
    #[serde(default)]
    pub chart: ChartStyle,
}

impl SiteConfig {
    /// Parse a site configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FolioResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| FolioError::serde(format!("parse site config JSON: {e}")))
    }

    /// Parse a site configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FolioError::validation(format!("open site config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Validate content, paths, styling and timeline categories.
    pub fn validate(&self) -> FolioResult<()> {
        if self.page.title.trim().is_empty() {
            return Err(FolioError::validation("page title must be non-empty"));
        }
        if self.profile.name.trim().is_empty() {
            return Err(FolioError::validation("profile name must be non-empty"));
        }
        for img in &self.profile.images {
            validate_rel_source(&img.path, "profile image path")?;
        }
        validate_rel_source(&self.resume.path, "resume path")?;

        for s in &self.socials {
            if s.label.trim().is_empty() {
                return Err(FolioError::validation("social label must be non-empty"));
            }
            validate_url(&s.url, "social url")?;
        }
        for p in &self.projects {
            if p.title.trim().is_empty() {
                return Err(FolioError::validation("project title must be non-empty"));
            }
            if let Some(link) = &p.link {
                validate_url(link, "project link")?;
            }
        }

        for link in &self.contact.links {
            validate_url(link, "contact link")?;
        }

        self.timeline.playback.validate()?;
        self.timeline.chart.validate()?;
        if self.timeline.palette.is_empty() && !self.timeline.milestones.is_empty() {
            return Err(FolioError::config(
                "timeline palette must declare at least one category",
            ));
        }
        for m in &self.timeline.milestones {
            if !self.timeline.palette.contains(&m.category) {
                return Err(FolioError::unknown_category(&m.category));
            }
            if let Some(y) = m.y_offset
                && !y.is_finite()
            {
                return Err(FolioError::validation(format!(
                    "milestone '{}' y_offset must be finite",
                    m.label
                )));
            }
        }
        Ok(())
    }

    /// Derive the timeline (static view and frames) from the configured milestones.
    pub fn build_timeline(&self) -> FolioResult<Timeline> {
        Timeline::from_defs(
            self.timeline.milestones.iter().cloned(),
            self.timeline.palette.clone(),
        )
    }

    /// Footer owner, falling back to the profile name.
    pub fn footer_owner(&self) -> &str {
        self.footer.owner.as_deref().unwrap_or(&self.profile.name)
    }
}

pub(crate) fn validate_rel_source(source: &str, field: &str) -> FolioResult<()> {
    if source.trim().is_empty() {
        return Err(FolioError::validation(format!("{field} must be non-empty")));
    }
    let s = source.replace('\\', "/");
    if s.starts_with('/') || s.contains(':') {
        return Err(FolioError::validation(format!(
            "{field} must be a relative path"
        )));
    }
    if s.split('/').any(|part| part == "..") {
        return Err(FolioError::validation(format!(
            "{field} must not contain '..'"
        )));
    }
    Ok(())
}

fn validate_url(url: &str, field: &str) -> FolioResult<()> {
    let lower = url.trim().to_ascii_lowercase();
    if ["https://", "http://", "mailto:"]
        .iter()
        .any(|scheme| lower.starts_with(scheme) && lower.len() > scheme.len())
    {
        return Ok(());
    }
    Err(FolioError::validation(format!(
        "{field} '{url}' must start with https://, http:// or mailto:"
    )))
}

#[cfg(test)]
#[path = "../../tests/unit/site/config.rs"]
mod tests;

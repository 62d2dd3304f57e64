use std::path::Path;

use crate::site::config::SiteConfig;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
/// Outcome of the profile picture lookup.
pub enum ProfileImageState {
    /// First existing candidate.
    Found {
        /// Path relative to the site root (and to the output directory).
        path: String,
        /// Caption text.
        caption: String,
    },
    /// No candidate exists on disk.
    Placeholder {
        /// Caption text.
        caption: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
/// Outcome of the resume lookup.
pub enum ResumeState {
    /// Resume exists and is offered for download.
    Available {
        /// Path relative to the site root.
        path: String,
        /// Download file name.
        file_name: String,
        /// Button label.
        label: String,
    },
    /// Resume is missing; the panel shows a warning instead.
    Missing {
        /// Warning text.
        message: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// File-backed page elements after checking the site root.
pub struct ResolvedAssets {
    /// Profile picture.
    pub profile: ProfileImageState,
    /// Resume download.
    pub resume: ResumeState,
}

impl ResolvedAssets {
    /// Relative paths that must be copied next to the generated page.
    pub fn files_to_copy(&self) -> Vec<&str> {
        let mut out = Vec::new();
        if let ProfileImageState::Found { path, .. } = &self.profile {
            out.push(path.as_str());
        }
        if let ResumeState::Available { path, .. } = &self.resume {
            out.push(path.as_str());
        }
        out
    }
}

/// Check which optional files exist under `root`. Missing files never fail the build.
#[tracing::instrument(skip_all, fields(root = %root.display()))]
pub fn resolve_assets(config: &SiteConfig, root: &Path) -> ResolvedAssets {
    let candidates = config.profile.image_candidates();
    let profile = candidates
        .iter()
        .find(|c| root.join(&c.path).is_file())
        .map(|c| ProfileImageState::Found {
            path: c.path.clone(),
            caption: c
                .caption
                .clone()
                .unwrap_or_else(|| config.profile.name.clone()),
        })
        .unwrap_or_else(|| {
            tracing::warn!(tried = candidates.len(), "no profile image found, using placeholder");
            ProfileImageState::Placeholder {
                caption: config.profile.name.clone(),
            }
        });

    let file_name = config.resume.file_name();
    let resume = if root.join(&config.resume.path).is_file() {
        ResumeState::Available {
            path: config.resume.path.clone(),
            file_name,
            label: config.resume.label.clone(),
        }
    } else {
        tracing::warn!(path = %config.resume.path, "resume not found");
        ResumeState::Missing {
            message: format!(
                "⚠️ Resume file not found. Please place '{file_name}' in your app folder."
            ),
        }
    };

    ResolvedAssets { profile, resume }
}

#[cfg(test)]
#[path = "../../tests/unit/site/assets.rs"]
mod tests;

/// Convenience result type used across folio.
pub type FolioResult<T> = Result<T, FolioError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum FolioError {
    /// Invalid user-provided data (paths, dimensions, intervals).
    #[error("validation error: {0}")]
    Validation(String),

    /// Site or timeline configuration that cannot be rendered faithfully.
    #[error("configuration error: {0}")]
    Config(String),

    /// Errors while producing chart SVG, HTML or raster output.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FolioError {
    /// Build a [`FolioError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FolioError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`FolioError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`FolioError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Error raised when a milestone names a category the palette does not declare.
    pub fn unknown_category(category: &str) -> Self {
        Self::Config(format!("unknown category '{category}'"))
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

impl From<handlebars::RenderError> for FolioError {
    fn from(e: handlebars::RenderError) -> Self {
        Self::Render(e.to_string())
    }
}

impl From<handlebars::TemplateError> for FolioError {
    fn from(e: handlebars::TemplateError) -> Self {
        Self::Render(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

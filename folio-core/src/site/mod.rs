pub(crate) mod assets;
pub(crate) mod build;
pub(crate) mod config;
pub(crate) mod render;
pub(crate) mod templates;

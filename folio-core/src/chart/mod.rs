pub(crate) mod layout;
pub(crate) mod offsets;
pub(crate) mod raster;
pub(crate) mod style;
pub(crate) mod svg;

//! Colors: named colormaps, palette sampling and user color specs.

pub(crate) mod colormap;
pub(crate) mod palette;
pub(crate) mod spec;

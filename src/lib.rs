//! radar-anim turns a JSON description of radar (spider) charts into a resolved, frame-ordered
//! render plan, and rasterizes that plan to PNG frames.
//!
//! # Pipeline overview
//!
//! 1. **Validate**: `serde_json::Value -> Config` (types, lengths, defaults, radial bounds)
//! 2. **Frames**: every group of an animated config gets an integer frame, either explicit or
//!    derived from `dd/mm/yyyy` dates in chronological order
//! 3. **Colors**: every group gets a concrete color; names keep one color across frames and no
//!    frame shows the same color twice
//! 4. **Order**: groups are bucketed into contiguous frame slots, gaps included
//! 5. **Render** (optional): `RenderPlan -> FrameRGBA` on the CPU, then PNG files
//!
//! Steps 1-4 are pure and deterministic; [`resolve_value`] runs them in order and fails on the
//! first error without partial output.
//!
//! # Getting started
//!
//! ```no_run
//! let plan = radar_anim::RenderPlan::from_path("chart.json")?;
//! radar_anim::save_plan(&plan, "out/chart.png".as_ref(), &radar_anim::RenderOpts::default())?;
//! # Ok::<(), radar_anim::RadarError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod color;
mod config;
mod foundation;
mod render;
mod resolve;

/// Demo configs as JSON builders.
pub mod presets;

pub use color::colormap::{Colormap, SEGMENTED_LUT_SIZE, builtin_names};
pub use color::palette::ColorPalette;
pub use color::spec::{ColorSlot, DEFAULT_COLOR_KEYWORD, parse_color_str, parse_color_value};
pub use config::model::{Config, DEFAULT_COLORMAP, DEFAULT_FRAME_LENGTH_MS, Group};
pub use config::validate::validate_config;
pub use foundation::core::{Number, Rgb, json_type_name};
pub use foundation::error::{RadarError, RadarResult};
pub use render::{FrameRGBA, RenderOpts, frame_path, render_frame, save_plan, save_png};
pub use resolve::colors::{ColorAssigner, resolve_colors};
pub use resolve::frames::{DATE_FORMAT, parse_date, resolve_frames};
pub use resolve::order::{MAX_FRAME_SLOTS, order_frames};
pub use resolve::{RenderPlan, resolve_value};

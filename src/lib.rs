//! scrollchrome - Custom-drawn scrollable-control chrome
//!
//! Ties the geometry and interaction engine of [`scrollchrome_ui`] to a
//! configuration file, a logger and the tiny-skia raster backend of
//! [`scrollchrome_raster`].

pub mod config;
pub mod logging;
mod scroll_view;
mod snapshot;

pub use config::{ChromeConfig, ConfigError, LogLevel, ScrollConfig, CONFIG_VERSION};
pub use scroll_view::ScrollView;
pub use snapshot::{render, save_png};

pub use scrollchrome_raster as raster;
pub use scrollchrome_ui as ui;

use std::path::Path;

use scrollchrome_raster::PixmapSurface;
use scrollchrome_ui::Color;

use crate::config::{ChromeConfig, ConfigError};
use crate::scroll_view::ScrollView;

/// Paint the view described by `config` onto a fresh pixmap.
pub fn render(config: &ChromeConfig) -> Result<PixmapSurface, scrollchrome_raster::RasterError> {
    let (width, height) = config.pixel_size();
    let mut surface = PixmapSurface::new(width, height, config.scale_factor)?;
    let backdrop = if config.dark {
        Color::rgb8(30, 30, 30)
    } else {
        Color::WHITE
    };
    surface.clear(backdrop);

    ScrollView::from_config(config).paint(&mut surface);
    Ok(surface)
}

/// Write `surface` as a PNG file.
pub fn save_png(surface: &PixmapSurface, path: &Path) -> Result<(), ConfigError> {
    let image = image::RgbaImage::from_raw(surface.width(), surface.height(), surface.to_rgba8())
        .ok_or_else(|| {
            ConfigError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "pixel buffer does not match surface size",
            ))
        })?;
    image.save_with_format(path, image::ImageFormat::Png)?;
    log::info!("Wrote {}x{} snapshot to {:?}", surface.width(), surface.height(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrollchrome_ui::KnownTheme;

    #[test]
    fn test_render_matches_config_size() {
        let config = ChromeConfig {
            scale_factor: 2.0,
            width: 60.0,
            height: 40.0,
            ..ChromeConfig::default()
        };
        let surface = render(&config).unwrap();
        assert_eq!((surface.width(), surface.height()), (120, 80));
    }

    #[test]
    fn test_render_paints_corner() {
        let config = ChromeConfig {
            theme: KnownTheme::WindowsDark,
            width: 100.0,
            height: 100.0,
            ..ChromeConfig::default()
        };
        let surface = render(&config).unwrap();
        assert_eq!(surface.pixel(90, 90), Some([102, 102, 102, 255]));
    }

    #[test]
    fn test_zero_size_fails() {
        let config = ChromeConfig {
            width: 0.0,
            ..ChromeConfig::default()
        };
        assert!(render(&config).is_err());
    }
}

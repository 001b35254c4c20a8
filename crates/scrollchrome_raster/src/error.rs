use thiserror::Error;

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("Invalid surface size: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("Failed to parse SVG: {0}")]
    SvgParse(String),

    #[error("Failed to create pixmap {width}x{height}")]
    PixmapCreation { width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, RasterError>;

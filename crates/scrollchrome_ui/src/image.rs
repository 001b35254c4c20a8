use std::sync::Arc;

/// A handle to shared RGBA8 image data.
///
/// Multiple drawables can share the same handle; paint surfaces may cache
/// whatever they derive from it keyed by the data pointer.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageHandle {
    /// The raw RGBA8 image data
    data: Arc<Vec<u8>>,
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
}

impl ImageHandle {
    /// Create a new image handle from RGBA8 data.
    ///
    /// Returns `None` if `data.len() != width * height * 4`.
    pub fn from_rgba8(data: Vec<u8>, width: u32, height: u32) -> Option<Self> {
        Self::from_rgba8_arc(Arc::new(data), width, height)
    }

    /// Create a new image handle from Arc-wrapped RGBA8 data.
    pub fn from_rgba8_arc(data: Arc<Vec<u8>>, width: u32, height: u32) -> Option<Self> {
        if data.len() != (width as usize) * (height as usize) * 4 {
            log::warn!(
                "Image data size mismatch: {} bytes for {}x{}",
                data.len(),
                width,
                height
            );
            return None;
        }

        Some(Self {
            data,
            width,
            height,
        })
    }

    /// Get the image data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get the image width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height.
    pub fn height(&self) -> u32 {
        self.height
    }
}

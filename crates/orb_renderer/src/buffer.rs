//! Caller-owned 8-bit pixel buffer the renderer writes into.

use crate::ConfigError;

/// Channel layout of a [`PixelBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelFormat {
    #[default]
    Rgba,
    Rgb,
}

impl PixelFormat {
    /// Bytes per pixel.
    pub fn channels(self) -> usize {
        match self {
            PixelFormat::Rgba => 4,
            PixelFormat::Rgb => 3,
        }
    }
}

/// Row-major, top-left origin view over an external byte buffer.
#[derive(Debug)]
pub struct PixelBuffer<'a> {
    width: u32,
    height: u32,
    format: PixelFormat,
    data: &'a mut [u8],
}

impl<'a> PixelBuffer<'a> {
    /// Wrap `data`, which must hold exactly `width * height` pixels.
    pub fn new(
        data: &'a mut [u8],
        width: u32,
        height: u32,
        format: PixelFormat,
    ) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::ZeroDimensions { width, height });
        }

        let expected = width as usize * height as usize * format.channels();
        if data.len() != expected {
            return Err(ConfigError::BufferSize {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            format,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Bytes in one scanline.
    pub fn row_stride(&self) -> usize {
        self.width as usize * self.format.channels()
    }

    /// Write one pixel. Alpha, if present, is set opaque.
    pub fn put(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let channels = self.format.channels();
        let offset = y as usize * self.row_stride() + x as usize * channels;
        write_pixel(&mut self.data[offset..offset + channels], rgb);
    }

    /// Read one pixel back as RGB.
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        let offset = y as usize * self.row_stride() + x as usize * self.format.channels();
        [self.data[offset], self.data[offset + 1], self.data[offset + 2]]
    }

    /// Raw bytes, row-major, top row first.
    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut *self.data
    }
}

/// Write `rgb` into a pixel slice of 3 or 4 bytes.
#[inline]
pub(crate) fn write_pixel(pixel: &mut [u8], rgb: [u8; 3]) {
    pixel[..3].copy_from_slice(&rgb);
    if let Some(alpha) = pixel.get_mut(3) {
        *alpha = 255;
    }
}

use crate::Error;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
/// RGB888, no alpha.
pub const DEFAULT_BYTES_PER_PIXEL: u32 = 3;

/// Size and memory layout of one frame in device memory.
///
/// Rows are stored back to back in row-major order. Unless a line length is
/// given, a row is exactly `width * bytes_per_pixel` bytes long, which is what
/// most RGB888 framebuffers use but is not guaranteed: a device may pad each
/// row, in which case its line length has to be passed explicitly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    bytes_per_pixel: u32,
    height: u32,
    line_length: Option<u32>,
    width: u32,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            bytes_per_pixel: DEFAULT_BYTES_PER_PIXEL,
            height: DEFAULT_HEIGHT,
            line_length: None,
            width: DEFAULT_WIDTH,
        }
    }
}

impl Geometry {
    /// Creates a geometry with implicit row stride.
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is zero, if a pixel cannot hold an RGB
    /// triplet or if the frame would not fit in memory.
    #[inline]
    pub fn new(width: u32, height: u32, bytes_per_pixel: u32) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::ZeroDimension { width, height });
        }

        if bytes_per_pixel < 3 {
            return Err(Error::PixelTooSmall { bytes_per_pixel });
        }

        let geometry = Self {
            bytes_per_pixel,
            height,
            line_length: None,
            width,
        };
        geometry.checked_frame_len()?;

        Ok(geometry)
    }

    /// Sets an explicit row stride in bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the stride is shorter than a row of pixels or if
    /// the frame would not fit in memory.
    #[inline]
    pub fn with_line_length(self, line_length: u32) -> Result<Self, Error> {
        let min = self.packed_row_len().ok_or(Error::FrameTooLarge)?;
        if line_length < min {
            return Err(Error::LineTooShort { line_length, min });
        }

        let geometry = Self {
            line_length: Some(line_length),
            ..self
        };
        geometry.checked_frame_len()?;

        Ok(geometry)
    }

    #[must_use]
    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    #[inline]
    pub const fn bytes_per_pixel(&self) -> u32 {
        self.bytes_per_pixel
    }

    #[must_use]
    #[inline]
    pub const fn line_length(&self) -> Option<u32> {
        self.line_length
    }

    /// Bytes between the start of two consecutive rows.
    #[must_use]
    #[inline]
    pub fn row_len(&self) -> usize {
        // validated on construction
        self.checked_row_len().unwrap_or_default()
    }

    /// Bytes written to the device per frame.
    #[must_use]
    #[inline]
    pub fn frame_len(&self) -> usize {
        // validated on construction
        self.checked_frame_len().unwrap_or_default()
    }

    const fn packed_row_len(&self) -> Option<u32> {
        self.width.checked_mul(self.bytes_per_pixel)
    }

    fn checked_row_len(&self) -> Result<usize, Error> {
        let row = match self.line_length {
            Some(line_length) => line_length,
            None => self.packed_row_len().ok_or(Error::FrameTooLarge)?,
        };
        usize::try_from(row).map_err(|_err| Error::FrameTooLarge)
    }

    fn checked_frame_len(&self) -> Result<usize, Error> {
        let height = usize::try_from(self.height).map_err(|_err| Error::FrameTooLarge)?;
        self.checked_row_len()?
            .checked_mul(height)
            .ok_or(Error::FrameTooLarge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_800x600_rgb888() {
        let geometry = Geometry::default();
        assert_eq!(geometry.width(), 800);
        assert_eq!(geometry.height(), 600);
        assert_eq!(geometry.bytes_per_pixel(), 3);
        assert_eq!(geometry.row_len(), 2400);
        assert_eq!(geometry.frame_len(), 800 * 600 * 3);
    }

    #[test]
    fn frame_len_is_width_times_height_times_bpp() {
        let geometry = Geometry::new(2, 1, 3).unwrap();
        assert_eq!(geometry.frame_len(), 6);

        let geometry = Geometry::new(7, 5, 4).unwrap();
        assert_eq!(geometry.frame_len(), 7 * 5 * 4);
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert_eq!(
            Geometry::new(0, 600, 3),
            Err(Error::ZeroDimension {
                width: 0,
                height: 600
            })
        );
        assert!(Geometry::new(800, 0, 3).is_err());
    }

    #[test]
    fn rejects_pixels_smaller_than_rgb() {
        assert_eq!(
            Geometry::new(800, 600, 2),
            Err(Error::PixelTooSmall { bytes_per_pixel: 2 })
        );
    }

    #[test]
    fn rejects_overflowing_frames() {
        assert_eq!(
            Geometry::new(u32::MAX, 2, 3),
            Err(Error::FrameTooLarge)
        );
    }

    #[test]
    fn line_length_sets_row_stride() {
        let geometry = Geometry::new(4, 3, 3).unwrap().with_line_length(16).unwrap();
        assert_eq!(geometry.line_length(), Some(16));
        assert_eq!(geometry.row_len(), 16);
        assert_eq!(geometry.frame_len(), 48);
    }

    #[test]
    fn line_length_must_cover_a_row() {
        let geometry = Geometry::new(4, 3, 3).unwrap();
        assert_eq!(
            geometry.with_line_length(11),
            Err(Error::LineTooShort {
                line_length: 11,
                min: 12
            })
        );
        assert!(geometry.with_line_length(12).is_ok());
    }
}

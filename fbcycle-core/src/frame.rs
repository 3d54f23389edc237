use crate::{Error, Geometry, Rgb};
use alloc::{vec, vec::Vec};

/// Builds a frame where every pixel holds `rgb`.
///
/// The returned buffer is `geometry.frame_len()` bytes long. Bytes of a pixel
/// past its RGB triplet and any row padding are left at zero.
#[must_use]
#[inline]
pub fn build_frame(geometry: &Geometry, rgb: Rgb) -> Vec<u8> {
    let mut frame = vec![0; geometry.frame_len()];
    paint(geometry, rgb, &mut frame);
    frame
}

/// Fills an existing frame buffer with `rgb`, overwriting every pixel.
///
/// # Errors
///
/// Returns an error if `frame` is not exactly `geometry.frame_len()` bytes.
#[inline]
pub fn fill_frame(geometry: &Geometry, rgb: Rgb, frame: &mut [u8]) -> Result<(), Error> {
    let expected = geometry.frame_len();
    if frame.len() != expected {
        return Err(Error::WrongFrameLength {
            expected,
            actual: frame.len(),
        });
    }

    paint(geometry, rgb, frame);
    Ok(())
}

fn paint(geometry: &Geometry, rgb: Rgb, frame: &mut [u8]) {
    let bpp = geometry.bytes_per_pixel() as usize;
    let row_pixels = geometry.width() as usize * bpp;
    let triplet = rgb.to_bytes();

    for row in frame.chunks_exact_mut(geometry.row_len()) {
        let (pixels, padding) = row.split_at_mut(row_pixels);
        for px in pixels.chunks_exact_mut(bpp) {
            px[..3].copy_from_slice(&triplet);
            px[3..].fill(0);
        }
        padding.fill(0);
    }

    tracing::trace!(
        r = rgb.r,
        g = rgb.g,
        b = rgb.b,
        len = frame.len(),
        "frame filled"
    );
}

use core::{error, fmt};
use fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    FrameTooLarge,
    LineTooShort { line_length: u32, min: u32 },
    PixelTooSmall { bytes_per_pixel: u32 },
    WrongFrameLength { expected: usize, actual: usize },
    ZeroDimension { width: u32, height: u32 },
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FrameTooLarge => {
                write!(f, "frame size does not fit in memory")
            }
            Self::LineTooShort { line_length, min } => write!(
                f,
                "line length of {line_length} bytes is shorter than a row of pixels ({min} bytes)"
            ),
            Self::PixelTooSmall { bytes_per_pixel } => write!(
                f,
                "{bytes_per_pixel} bytes per pixel cannot hold an RGB triplet, at least 3 are needed"
            ),
            Self::WrongFrameLength { expected, actual } => write!(
                f,
                "frame buffer has the wrong size: expected {expected} bytes, got {actual} bytes"
            ),
            Self::ZeroDimension { width, height } => {
                write!(f, "invalid frame dimensions {width}x{height}")
            }
        }
    }
}

impl error::Error for Error {}

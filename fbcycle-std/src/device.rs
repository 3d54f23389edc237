use crate::Error;
use std::{
    fs::{File, OpenOptions},
    io::{Seek, SeekFrom, Write},
    path::{Path, PathBuf},
};

/// Destination of whole frames.
pub trait FrameSink {
    /// Replaces the displayed frame with `frame`.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame could not be written. Callers treat any
    /// error as fatal.
    fn write_frame(&mut self, frame: &[u8]) -> Result<(), Error>;
}

/// An open framebuffer device.
///
/// The device stays open for as long as the value lives and is closed when it
/// is dropped, whether the program ends normally or through an error.
pub struct Framebuffer<D = File> {
    device: D,
    path: PathBuf,
}

impl Framebuffer {
    /// Opens the device node at `path` for reading and writing.
    ///
    /// # Errors
    ///
    /// Returns an error if the node does not exist or cannot be opened
    /// read-write.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();

        let device = OpenOptions::new()
            .read(true)
            .write(true)
            .create(false)
            .truncate(false)
            .open(path)
            .map_err(|source| Error::Open {
                path: path.to_owned(),
                source,
            })?;

        tracing::info!(path = %path.display(), "framebuffer opened");

        Ok(Self::from_device(device, path))
    }
}

impl<D> Framebuffer<D> {
    /// Wraps an already open device. `path` is only used in error messages
    /// and logs.
    pub fn from_device<P: Into<PathBuf>>(device: D, path: P) -> Self {
        Self {
            device,
            path: path.into(),
        }
    }

    #[must_use]
    pub const fn device(&self) -> &D {
        &self.device
    }
}

impl<D: Write + Seek> FrameSink for Framebuffer<D> {
    fn write_frame(&mut self, frame: &[u8]) -> Result<(), Error> {
        self.device
            .seek(SeekFrom::Start(0))
            .map_err(|source| Error::Seek {
                path: self.path.clone(),
                source,
            })?;

        self.device
            .write_all(frame)
            .and_then(|()| self.device.flush())
            .map_err(|source| Error::Write {
                path: self.path.clone(),
                source,
            })
    }
}

impl<D> Drop for Framebuffer<D> {
    fn drop(&mut self) {
        tracing::debug!(path = %self.path.display(), "framebuffer closed");
    }
}

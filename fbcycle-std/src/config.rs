use crate::{ConfigError, Error};
use fbcycle_core::{
    DEFAULT_BYTES_PER_PIXEL, DEFAULT_HEIGHT, DEFAULT_WIDTH, FRAME_INTERVAL_MS, Geometry,
};
use serde::Deserialize;
use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    time::Duration,
};

pub const DEFAULT_DEVICE: &str = "/dev/fb0";

/// Run settings. Missing fields in a config file take their default value.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub bytes_per_pixel: u32,
    pub device: PathBuf,
    /// Stop after this many frames instead of running forever.
    pub frames: Option<u64>,
    pub height: u32,
    pub interval_ms: u64,
    /// Row stride in bytes, for devices that pad their rows.
    pub line_length: Option<u32>,
    pub width: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bytes_per_pixel: DEFAULT_BYTES_PER_PIXEL,
            device: PathBuf::from(DEFAULT_DEVICE),
            frames: None,
            height: DEFAULT_HEIGHT,
            interval_ms: FRAME_INTERVAL_MS,
            line_length: None,
            width: DEFAULT_WIDTH,
        }
    }
}

impl Config {
    /// Reads a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON for
    /// this structure.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let wrap = |source| Error::Config {
            path: path.to_owned(),
            source,
        };

        let file = File::open(path).map_err(|err| wrap(ConfigError::Io(err)))?;
        let config = serde_json::from_reader(BufReader::new(file))
            .map_err(|err| wrap(ConfigError::Json(err)))?;

        tracing::debug!(path = %path.display(), "config loaded");

        Ok(config)
    }

    /// Validated frame geometry.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions do not describe a usable RGB frame.
    pub fn geometry(&self) -> Result<Geometry, Error> {
        let geometry = Geometry::new(self.width, self.height, self.bytes_per_pixel)?;

        match self.line_length {
            Some(line_length) => Ok(geometry.with_line_length(line_length)?),
            None => Ok(geometry),
        }
    }

    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

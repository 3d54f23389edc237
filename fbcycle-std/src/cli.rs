use crate::{Config, Error};
pub use clap;
use std::path::{Path, PathBuf};

pub const FBCYCLE_BIN: &str = "fbcycle";
const ABOUT: &str = "Cycles solid red, green and blue frames on a raw RGB framebuffer.";
const AFTER_HELP: &str = "Settings are taken from the built-in defaults, then from the \
config file, then from the flags above.

Defaults:

    | Setting         | Value    |
    | --------------- | -------- |
    | device          | /dev/fb0 |
    | width x height  | 800x600  |
    | bytes per pixel | 3        |
    | interval        | 40 ms    |

Set RUST_LOG to override the log filter.
";

#[derive(clap::Parser, Debug, Default)]
#[command(name = FBCYCLE_BIN, about = ABOUT, after_help = AFTER_HELP)]
pub struct Cli {
    #[arg(
        short = 'b',
        long,
        help = "Bytes per pixel, the first three hold red, green and blue"
    )]
    bytes_per_pixel: Option<u32>,
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "JSON file with default settings"
    )]
    config: Option<PathBuf>,
    #[arg(short, long, help = "Framebuffer device to write to")]
    device: Option<PathBuf>,
    #[arg(short = 'n', long, help = "Stop after this many frames")]
    frames: Option<u64>,
    #[arg(short = 'H', long, help = "Frame height in pixels")]
    height: Option<u32>,
    #[arg(short, long, value_name = "MS", help = "Delay between frames")]
    interval: Option<u64>,
    #[arg(
        long,
        value_name = "BYTES",
        help = "Row stride in bytes",
        long_help = "Row stride in bytes. Needed when the device pads its rows; \
           defaults to width times bytes per pixel."
    )]
    line_length: Option<u32>,
    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        help = "More logging, repeat for trace output"
    )]
    verbose: u8,
    #[arg(short = 'W', long, help = "Frame width in pixels")]
    width: Option<u32>,
}

impl Cli {
    #[must_use]
    #[inline]
    pub fn config_file(&self) -> Option<&Path> {
        self.config.as_deref()
    }

    #[must_use]
    #[inline]
    pub const fn verbose(&self) -> u8 {
        self.verbose
    }

    /// Builds the run settings: defaults, then the config file if one was
    /// given, then the flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be loaded.
    pub fn config(&self) -> Result<Config, Error> {
        let base = match self.config_file() {
            Some(path) => Config::from_json_file(path)?,
            None => Config::default(),
        };

        Ok(self.apply(base))
    }

    /// Overrides the fields of `config` that were given on the command line.
    #[must_use]
    pub fn apply(&self, config: Config) -> Config {
        Config {
            bytes_per_pixel: self.bytes_per_pixel.unwrap_or(config.bytes_per_pixel),
            device: self.device.clone().unwrap_or(config.device),
            frames: self.frames.or(config.frames),
            height: self.height.unwrap_or(config.height),
            interval_ms: self.interval.unwrap_or(config.interval_ms),
            line_length: self.line_length.or(config.line_length),
            width: self.width.unwrap_or(config.width),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn no_flags_keep_the_defaults() {
        let cli = Cli::try_parse_from([FBCYCLE_BIN]).unwrap();
        assert_eq!(cli.config().unwrap(), Config::default());
        assert_eq!(cli.verbose(), 0);
    }

    #[test]
    fn flags_override_the_config() {
        let cli = Cli::try_parse_from([
            FBCYCLE_BIN,
            "-d",
            "/dev/fb1",
            "-W",
            "2",
            "-H",
            "1",
            "-b",
            "4",
            "--line-length",
            "12",
            "-i",
            "10",
            "-n",
            "3",
            "-vv",
        ])
        .unwrap();

        let config = cli.apply(Config {
            width: 1024,
            ..Config::default()
        });

        assert_eq!(
            config,
            Config {
                bytes_per_pixel: 4,
                device: PathBuf::from("/dev/fb1"),
                frames: Some(3),
                height: 1,
                interval_ms: 10,
                line_length: Some(12),
                width: 2,
            }
        );
        assert_eq!(cli.verbose(), 2);
    }

    #[test]
    fn unset_flags_leave_config_values() {
        let cli = Cli::try_parse_from([FBCYCLE_BIN, "-n", "6"]).unwrap();
        let file = Config {
            device: PathBuf::from("/tmp/fake-fb"),
            interval_ms: 5,
            ..Config::default()
        };

        let config = cli.apply(file.clone());
        assert_eq!(
            config,
            Config {
                frames: Some(6),
                ..file
            }
        );
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let cli = Cli::try_parse_from([FBCYCLE_BIN, "-c", "/nonexistent/fbcycle.json"]).unwrap();
        assert!(matches!(cli.config(), Err(Error::Config { .. })));
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

#[cfg(feature = "cli")]
pub mod cli;
mod clock;
mod config;
mod cycle;
mod device;
mod error;
pub mod logging;

pub use clock::{Clock, SpinClock};
pub use config::{Config, DEFAULT_DEVICE};
pub use cycle::Cycler;
pub use device::{FrameSink, Framebuffer};
pub use error::{ConfigError, Error};
pub use fbcycle_core::{ColorCycle, Geometry, Phase, Rgb, build_frame};

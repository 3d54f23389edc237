//! # fbcycle core
//!
//! Pure building blocks for driving a raw RGB framebuffer: frame geometry,
//! the red/green/blue color cycle and solid-color frame generation. Nothing
//! in this crate touches the filesystem; the device writer and the timed loop
//! live in `fbcycle-std`.
//!
//! ## Tracing
//!
//! Frame building emits `trace` level events under the `fbcycle_core`
//! target. Install any `tracing` subscriber to see them:
//!
//! ```rust,ignore
//! use fbcycle_core::{Geometry, Rgb};
//! use tracing_subscriber::{fmt, EnvFilter};
//!
//! tracing::subscriber::with_default(
//!     fmt::Subscriber::builder()
//!         .with_env_filter(EnvFilter::new("fbcycle_core=trace"))
//!         .finish(),
//!     || {
//!         let frame = fbcycle_core::build_frame(&Geometry::default(), Rgb::RED);
//!     },
//! );
//! ```

extern crate alloc;

mod color;
mod error;
mod frame;
mod geometry;
mod timing;

pub use {
    color::{ColorCycle, Phase, Rgb},
    error::Error,
    frame::{build_frame, fill_frame},
    geometry::{DEFAULT_BYTES_PER_PIXEL, DEFAULT_HEIGHT, DEFAULT_WIDTH, Geometry},
    timing::FRAME_INTERVAL_MS,
};

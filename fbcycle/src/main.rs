use anyhow::Context as _;
use clap::Parser as _;
use fbcycle_std::{Cycler, Framebuffer, SpinClock, cli::Cli, logging};

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    logging::init(args.verbose()).context("couldn't install the log subscriber")?;

    let config = args.config()?;
    let geometry = config
        .geometry()
        .context("invalid framebuffer geometry")?;

    let device = Framebuffer::open(&config.device)?;
    let mut cycler = Cycler::new(device, SpinClock::new(), geometry, config.interval());

    let result = match config.frames {
        Some(frames) => cycler.run_for(frames),
        None => match cycler.run() {
            Ok(never) => match never {},
            Err(err) => Err(err),
        },
    };

    result.with_context(|| format!("stopped after {} frames", cycler.frames_written()))
}

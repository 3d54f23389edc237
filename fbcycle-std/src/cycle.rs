use crate::{Clock, Error, FrameSink};
use core::convert::Infallible;
use fbcycle_core::{ColorCycle, Geometry, Phase, build_frame};
use std::time::Duration;

/// Writes red, green and blue frames to a sink, one every `interval`.
pub struct Cycler<S, C> {
    clock: C,
    colors: ColorCycle,
    frames_written: u64,
    geometry: Geometry,
    interval: Duration,
    sink: S,
}

impl<S: FrameSink, C: Clock> Cycler<S, C> {
    #[must_use]
    pub fn new(sink: S, clock: C, geometry: Geometry, interval: Duration) -> Self {
        Self {
            clock,
            colors: ColorCycle::new(),
            frames_written: 0,
            geometry,
            interval,
            sink,
        }
    }

    #[must_use]
    pub const fn frames_written(&self) -> u64 {
        self.frames_written
    }

    /// Phase of the frame the next `step` will write.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.colors.current()
    }

    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the loop and returns its sink.
    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Writes the frame for the current phase, waits one interval and moves
    /// on to the next phase. Returns the phase that was written.
    ///
    /// # Errors
    ///
    /// Returns the sink's error. The phase does not advance in that case.
    pub fn step(&mut self) -> Result<Phase, Error> {
        let phase = self.colors.current();
        let frame = build_frame(&self.geometry, phase.rgb());

        self.sink.write_frame(&frame)?;
        self.frames_written += 1;

        tracing::trace!(
            %phase,
            frame = self.frames_written,
            bytes = frame.len(),
            "frame written"
        );

        self.clock.sleep(self.interval);
        self.colors.next();

        Ok(phase)
    }

    /// Runs until the sink fails.
    ///
    /// # Errors
    ///
    /// Returns the first write error. No frame is written after it.
    pub fn run(&mut self) -> Result<Infallible, Error> {
        tracing::info!(
            width = self.geometry.width(),
            height = self.geometry.height(),
            bytes_per_pixel = self.geometry.bytes_per_pixel(),
            interval_ms = self.interval.as_millis(),
            "cycling colors"
        );

        loop {
            self.step()?;
        }
    }

    /// Writes `frames` frames, then returns.
    ///
    /// # Errors
    ///
    /// Returns the first write error. No frame is written after it.
    pub fn run_for(&mut self, frames: u64) -> Result<(), Error> {
        tracing::info!(
            frames,
            width = self.geometry.width(),
            height = self.geometry.height(),
            bytes_per_pixel = self.geometry.bytes_per_pixel(),
            interval_ms = self.interval.as_millis(),
            "cycling colors"
        );

        for _ in 0..frames {
            self.step()?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        frames: Vec<Vec<u8>>,
    }

    impl FrameSink for Recorder {
        fn write_frame(&mut self, frame: &[u8]) -> Result<(), Error> {
            self.frames.push(frame.to_vec());
            Ok(())
        }
    }

    #[derive(Default)]
    struct NoSleep {
        slept: Duration,
    }

    impl Clock for NoSleep {
        fn now(&self) -> Duration {
            self.slept
        }

        fn sleep(&mut self, duration: Duration) {
            self.slept += duration;
        }
    }

    fn cycler() -> Cycler<Recorder, NoSleep> {
        let geometry = Geometry::new(2, 1, 3).unwrap();
        Cycler::new(
            Recorder::default(),
            NoSleep::default(),
            geometry,
            Duration::from_millis(40),
        )
    }

    #[test]
    fn step_returns_phases_in_order() {
        let mut cycler = cycler();
        assert_eq!(cycler.step().unwrap(), Phase::Red);
        assert_eq!(cycler.step().unwrap(), Phase::Green);
        assert_eq!(cycler.step().unwrap(), Phase::Blue);
        assert_eq!(cycler.phase(), Phase::Red);
        assert_eq!(cycler.frames_written(), 3);
    }

    #[test]
    fn each_step_sleeps_one_interval() {
        let mut cycler = cycler();
        cycler.run_for(5).unwrap();
        assert_eq!(cycler.clock.now(), Duration::from_millis(200));
    }

    #[test]
    fn run_for_zero_writes_nothing() {
        let mut cycler = cycler();
        cycler.run_for(0).unwrap();
        assert!(cycler.into_sink().frames.is_empty());
    }
}

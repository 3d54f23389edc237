use core::fmt;

/// One RGB888 pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLUE: Self = Self::new(0, 0, 0xFF);
    pub const GREEN: Self = Self::new(0, 0xFF, 0);
    pub const RED: Self = Self::new(0xFF, 0, 0);

    #[must_use]
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The triplet as it is stored in a frame: red, green, blue.
    #[must_use]
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// State of the color cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Red,
    Green,
    Blue,
}

impl Phase {
    #[must_use]
    #[inline]
    pub const fn rgb(self) -> Rgb {
        match self {
            Self::Red => Rgb::RED,
            Self::Green => Rgb::GREEN,
            Self::Blue => Rgb::BLUE,
        }
    }

    #[must_use]
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Self::Red => Self::Green,
            Self::Green => Self::Blue,
            Self::Blue => Self::Red,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => write!(f, "red"),
            Self::Green => write!(f, "green"),
            Self::Blue => write!(f, "blue"),
        }
    }
}

/// Endless red, green, blue sequence starting at red.
#[derive(Clone, Debug, Default)]
pub struct ColorCycle {
    phase: Phase,
}

impl ColorCycle {
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Phase the next call to `next` will yield.
    #[must_use]
    #[inline]
    pub const fn current(&self) -> Phase {
        self.phase
    }
}

impl Iterator for ColorCycle {
    type Item = Phase;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let phase = self.phase;
        self.phase = phase.next();
        Some(phase)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl core::iter::FusedIterator for ColorCycle {}

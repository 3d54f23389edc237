/// Delay between two consecutive frame writes, in milliseconds.
pub const FRAME_INTERVAL_MS: u64 = 40;

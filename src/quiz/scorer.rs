//! Time-decayed points for a correct answer, plus the round timing constants

use std::time::Duration;

/// Seconds on the clock when a round starts
pub const INITIAL_TIME_SECS: u32 = 20;
/// Interval between countdown ticks
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);
/// How long the revealed answer stays up before the next round
pub const FEEDBACK_DURATION: Duration = Duration::from_millis(3200);

/// Points for a correct answer given the seconds left on the clock
///
/// Bands by elapsed seconds: <5 → 5, <8 → 4, <11 → 3, <15 → 2, else 1.
/// Never called for a timeout.
pub fn points(seconds_remaining: u32) -> u32 {
    let elapsed = INITIAL_TIME_SECS.saturating_sub(seconds_remaining);
    match elapsed {
        0..=4 => 5,
        5..=7 => 4,
        8..=10 => 3,
        11..=14 => 2,
        _ => 1,
    }
}

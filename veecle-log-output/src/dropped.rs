//! Notices about records lost before they could be rendered.

use core::fmt::Write;

use crate::level::{COLOR_DEFAULT, COLOR_RED};
use crate::sink::{self, Sink};

/// Highest count printed, larger counts are clamped.
pub const MAX_DROPPED: u32 = 9999;

/// Writes `--- <count> messages dropped ---` straight to `sink`, bypassing any buffering.
///
/// With `colors` set the notice is printed in red.
///
/// ```rust
/// use veecle_log_output::dropped::report;
///
/// let mut sink = heapless::Vec::<u8, 64>::new();
/// report(&mut sink, 15_000, false);
/// assert_eq!(sink.as_slice(), b"--- 9999 messages dropped ---\r\n");
/// ```
pub fn report<S>(sink: &mut S, count: u32, colors: bool)
where
    S: Sink + ?Sized,
{
    let count = count.min(MAX_DROPPED);

    #[cfg(feature = "tracing")]
    tracing::debug!(count, "reporting dropped log messages");

    let mut digits = heapless::String::<4>::new();
    // Cannot fail, the count has at most four digits.
    let _ = write!(digits, "{count}");

    if colors {
        sink::write_all(sink, COLOR_RED.as_bytes());
    }
    sink::write_all(sink, b"--- ");
    sink::write_all(sink, digits.as_bytes());
    sink::write_all(sink, b" messages dropped ---\r\n");
    if colors {
        sink::write_all(sink, COLOR_DEFAULT.as_bytes());
    }
}

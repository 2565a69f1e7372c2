//! Rendering of record timestamps.
//!
//! Depending on the [`FormatFlags`] a timestamp is printed as
//!
//! - raw zero-padded ticks: `[00012345] `,
//! - a clock (the default formatted style): `[01:02:03.004,005] `,
//! - decimal seconds ([`FormatFlags::FORMAT_SECONDS`]): `[ 3723.004005] `,
//! - an RFC 5424 timestamp ([`FormatFlags::FORMAT_SYSLOG`]): `2000-02-29T00:00:00.000000Z `.
//!
//! Formatted styles need a configured [`Clock`] and print nothing without one.

use core::fmt;

use crate::FormatFlags;
use crate::buffer::print;
use crate::calendar::Date;
use crate::clock::{Clock, RAW_TICKS_WIDTH, Ticks};

/// Renders `ticks` into `out` and returns the number of bytes produced.
pub fn format<W>(out: &mut W, clock: &Clock, flags: FormatFlags, ticks: Ticks) -> usize
where
    W: fmt::Write + ?Sized,
{
    if !flags.formats_timestamp() {
        return print(
            out,
            format_args!("[{ticks:0width$}] ", width = RAW_TICKS_WIDTH),
        );
    }

    let Some(time) = clock.split(ticks) else {
        return 0;
    };

    if flags.contains(FormatFlags::FORMAT_SYSLOG) {
        let Date { year, month, day } = Date::from_unix_seconds(time.total_seconds);
        print(
            out,
            format_args!(
                "{year:04}-{month:02}-{day:02}T{:02}:{:02}:{:02}.{:06}Z ",
                time.hours % 24,
                time.minutes,
                time.seconds,
                time.subsec_micros(),
            ),
        )
    } else if flags.contains(FormatFlags::FORMAT_SECONDS) {
        print(
            out,
            format_args!("[{:5}.{:06}] ", time.total_seconds, time.subsec_micros()),
        )
    } else {
        print(
            out,
            format_args!(
                "[{:02}:{:02}:{:02}.{:03},{:03}] ",
                time.hours, time.minutes, time.seconds, time.millis, time.micros,
            ),
        )
    }
}

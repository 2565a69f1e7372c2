//! Per-record header and footer.
//!
//! A header consists of, in order:
//!
//! 1. the syslog priority and version (`<134>1 `) for [`FormatFlags::FORMAT_SYSLOG`],
//! 2. the tag of the output, if one is set,
//! 3. the timestamp for [`FormatFlags::TIMESTAMP`], see [`timestamp`](crate::timestamp),
//! 4. the syslog hostname and placeholder fields, or the color escape for [`FormatFlags::COLORS`],
//! 5. the severity tag for [`FormatFlags::LEVEL`], the domain and the source.

use core::fmt;

use crate::buffer::print;
use crate::level::COLOR_DEFAULT;
use crate::{Clock, Entry, FormatFlags, timestamp};

/// Syslog facility of every record, `local0`.
pub const SYSLOG_FACILITY: u8 = 16;

/// Hostname printed in syslog headers if none is configured.
pub const DEFAULT_HOSTNAME: &str = "veecle";

/// Long-lived decoration settings of an output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Style<'a> {
    /// Clock used for formatted timestamps.
    pub clock: Clock,
    /// Tag printed in front of every record.
    pub tag: Option<&'a str>,
    /// Hostname used in syslog headers.
    pub hostname: Option<&'a str>,
    /// Whether info records are colored green.
    pub info_green: bool,
}

/// Renders the header of `entry` and returns its length.
///
/// Color escapes do not occupy a column and are not included in the length.
/// The length is the left margin of hexdump lines following the message.
pub fn prefix<W>(out: &mut W, style: &Style<'_>, flags: FormatFlags, entry: &Entry<'_>) -> usize
where
    W: fmt::Write + ?Sized,
{
    let syslog = flags.contains(FormatFlags::FORMAT_SYSLOG);
    let level = entry.level;
    let mut length = 0;

    if syslog {
        let priority = u16::from(SYSLOG_FACILITY) * 8 + u16::from(level.rfc5424_severity());
        length += print(out, format_args!("<{priority}>1 "));
    }

    if let Some(tag) = style.tag {
        length += print(out, format_args!("{tag} "));
    }

    if flags.contains(FormatFlags::TIMESTAMP) {
        length += timestamp::format(out, &style.clock, flags, entry.timestamp);
    }

    if syslog {
        let hostname = style.hostname.unwrap_or(DEFAULT_HOSTNAME);
        length += print(out, format_args!("{hostname} - - - - "));
    } else if flags.contains(FormatFlags::COLORS)
        && let Some(color) = level.color(style.info_green)
    {
        print(out, format_args!("{color}"));
    }

    if flags.contains(FormatFlags::LEVEL)
        && let Some(tag) = level.tag()
    {
        length += print(out, format_args!("<{tag}> "));
    }

    if let Some(domain) = entry.domain {
        length += print(out, format_args!("{domain}/"));
    }

    if let Some(source) = entry.source {
        length += if flags.function_prefix(level) {
            print(out, format_args!("{source}."))
        } else {
            print(out, format_args!("{source}: "))
        };
    }

    length
}

/// Renders the footer of a record: the color reset and the line terminator.
pub fn postfix<W>(out: &mut W, flags: FormatFlags)
where
    W: fmt::Write + ?Sized,
{
    if flags.contains(FormatFlags::COLORS) {
        print(out, format_args!("{COLOR_DEFAULT}"));
    }
    newline(out, flags);
}

/// Renders the line terminator selected by `flags`.
///
/// Syslog records and [`FormatFlags::CRLF_NONE`] have none, [`FormatFlags::CRLF_LFONLY`] uses `\n` and everything
/// else `\r\n`.
pub fn newline<W>(out: &mut W, flags: FormatFlags)
where
    W: fmt::Write + ?Sized,
{
    if flags.intersects(FormatFlags::FORMAT_SYSLOG | FormatFlags::CRLF_NONE) {
        return;
    }

    if flags.contains(FormatFlags::CRLF_LFONLY) {
        print(out, format_args!("\n"));
    } else {
        print(out, format_args!("\r\n"));
    }
}

use bitflags::bitflags;

use crate::Level;

bitflags! {
    /// Selects how a record is decorated.
    ///
    /// The flags are supplied per call, so one output can serve several presentations.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FormatFlags: u32 {
        /// Surround the record with ANSI color escapes chosen by severity.
        const COLORS = 1 << 0;
        /// Print the record timestamp.
        const TIMESTAMP = 1 << 1;
        /// Render the timestamp as a wall clock instead of raw ticks.
        const FORMAT_TIMESTAMP = 1 << 2;
        /// Print the severity tag (`<err>`, `<wrn>`, ...).
        const LEVEL = 1 << 3;
        /// Do not terminate records with a newline.
        const CRLF_NONE = 1 << 4;
        /// Terminate records with `\n` instead of `\r\n`.
        const CRLF_LFONLY = 1 << 5;
        /// Frame records as RFC 5424 syslog messages.
        const FORMAT_SYSLOG = 1 << 6;
        /// Render the timestamp as decimal seconds (`[    1.000500] `).
        const FORMAT_SECONDS = 1 << 7;

        /// Terminate error sources with `.` instead of `: `.
        const FUNCTION_PREFIX_ERR = 1 << 8;
        /// Terminate warning sources with `.` instead of `: `.
        const FUNCTION_PREFIX_WRN = 1 << 9;
        /// Terminate info sources with `.` instead of `: `.
        const FUNCTION_PREFIX_INF = 1 << 10;
        /// Terminate debug sources with `.` instead of `: `.
        const FUNCTION_PREFIX_DBG = 1 << 11;
        /// Function prefix for every severity.
        const FUNCTION_PREFIX = Self::FUNCTION_PREFIX_ERR.bits()
            | Self::FUNCTION_PREFIX_WRN.bits()
            | Self::FUNCTION_PREFIX_INF.bits()
            | Self::FUNCTION_PREFIX_DBG.bits();
    }
}

impl FormatFlags {
    /// Returns whether the timestamp is rendered as a clock rather than raw ticks.
    pub fn formats_timestamp(self) -> bool {
        self.intersects(Self::FORMAT_TIMESTAMP | Self::FORMAT_SYSLOG | Self::FORMAT_SECONDS)
    }

    /// Returns whether the source of a `level` record is a function name.
    pub fn function_prefix(self, level: Level) -> bool {
        let flag = match level {
            Level::Error => Self::FUNCTION_PREFIX_ERR,
            Level::Warning => Self::FUNCTION_PREFIX_WRN,
            Level::Info => Self::FUNCTION_PREFIX_INF,
            Level::Debug => Self::FUNCTION_PREFIX_DBG,
            Level::None | Level::RawString(_) => return false,
        };
        self.contains(flag)
    }
}

#[cfg(test)]
mod tests {
    use super::FormatFlags;
    use crate::{Level, Newlines};

    #[test]
    fn function_prefix_follows_mask() {
        let flags = FormatFlags::FUNCTION_PREFIX_ERR | FormatFlags::FUNCTION_PREFIX_DBG;

        assert!(flags.function_prefix(Level::Error));
        assert!(!flags.function_prefix(Level::Warning));
        assert!(!flags.function_prefix(Level::Info));
        assert!(flags.function_prefix(Level::Debug));
        assert!(!FormatFlags::FUNCTION_PREFIX.function_prefix(Level::None));
        assert!(
            !FormatFlags::FUNCTION_PREFIX.function_prefix(Level::RawString(Newlines::Expand))
        );
    }

    #[test]
    fn any_clock_style_formats() {
        assert!(!FormatFlags::TIMESTAMP.formats_timestamp());
        assert!(FormatFlags::FORMAT_TIMESTAMP.formats_timestamp());
        assert!(FormatFlags::FORMAT_SYSLOG.formats_timestamp());
        assert!(FormatFlags::FORMAT_SECONDS.formats_timestamp());
    }
}

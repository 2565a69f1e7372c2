/// ANSI escape resetting all attributes.
pub(crate) const COLOR_DEFAULT: &str = "\x1B[0m";
pub(crate) const COLOR_RED: &str = "\x1B[1;31m";
pub(crate) const COLOR_GREEN: &str = "\x1B[1;32m";
pub(crate) const COLOR_YELLOW: &str = "\x1B[1;33m";

/// Severity of a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// No severity attached.
    None,

    /// The "err" level.
    Error,

    /// The "wrn" level.
    Warning,

    /// The "inf" level.
    Info,

    /// The "dbg" level.
    Debug,

    /// An unframed raw string.
    ///
    /// Raw strings are printed without prefix, postfix or decoration.
    RawString(Newlines),
}

/// Newline handling of a [`Level::RawString`] record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Newlines {
    /// Expand every `\n` into `\r\n`.
    Expand,

    /// Pass the payload through unmodified.
    Verbatim,
}

impl Level {
    /// The three letter tag printed between angle brackets.
    pub fn tag(self) -> Option<&'static str> {
        match self {
            Level::Error => Some("err"),
            Level::Warning => Some("wrn"),
            Level::Info => Some("inf"),
            Level::Debug => Some("dbg"),
            Level::None | Level::RawString(_) => None,
        }
    }

    /// The ANSI color escape starting a record of this severity.
    ///
    /// Info records are only colored (green) if `info_green` is set.
    pub fn color(self, info_green: bool) -> Option<&'static str> {
        match self {
            Level::Error => Some(COLOR_RED),
            Level::Warning => Some(COLOR_YELLOW),
            Level::Info => info_green.then_some(COLOR_GREEN),
            Level::Debug | Level::None | Level::RawString(_) => None,
        }
    }

    /// Maps the severity onto RFC 5424 severity codes.
    ///
    /// ```text
    /// 0   Emergency      System is unusable
    /// 1   Alert          Action must be taken immediately
    /// 2   Critical       Critical conditions
    /// 3   Error          Error conditions
    /// 4   Warning        Warning conditions
    /// 5   Notice         Normal but significant condition
    /// 6   Informational  Informational messages
    /// 7   Debug          Debug-level messages
    /// ```
    pub fn rfc5424_severity(self) -> u8 {
        match self {
            Level::Error => 3,
            Level::Warning => 4,
            Level::Info => 6,
            Level::Debug | Level::None | Level::RawString(_) => 7,
        }
    }

    /// Returns whether records of this level are unframed raw strings.
    pub fn is_raw_string(self) -> bool {
        matches!(self, Level::RawString(_))
    }
}

#[cfg(test)]
mod tests {
    use super::{Level, Newlines};
    use test_case::test_case;

    #[test_case(Level::Error, Some("err"), 3)]
    #[test_case(Level::Warning, Some("wrn"), 4)]
    #[test_case(Level::Info, Some("inf"), 6)]
    #[test_case(Level::Debug, Some("dbg"), 7)]
    #[test_case(Level::None, None, 7)]
    #[test_case(Level::RawString(Newlines::Verbatim), None, 7)]
    fn level_mappings(level: Level, tag: Option<&str>, severity: u8) {
        assert_eq!(level.tag(), tag);
        assert_eq!(level.rfc5424_severity(), severity);
    }

    #[test]
    fn info_color_is_optional() {
        assert_eq!(Level::Info.color(false), None);
        assert_eq!(Level::Info.color(true), Some("\x1B[1;32m"));
        assert_eq!(Level::Error.color(false), Some("\x1B[1;31m"));
        assert_eq!(Level::Warning.color(false), Some("\x1B[1;33m"));
        assert_eq!(Level::Debug.color(true), None);
    }
}

//! Contracts towards the record store and the argument decoder.

use core::fmt;

use crate::{Level, Ticks};

/// The encoded argument payload of a record.
///
/// Decoding the payload is up to the implementor, the output only provides the writer to render into.
/// Decoding errors are reported through [`fmt::Error`].
pub trait Payload {
    /// Renders the decoded payload into `out`.
    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result;
}

impl Payload for str {
    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        out.write_str(self)
    }
}

impl Payload for fmt::Arguments<'_> {
    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        out.write_fmt(*self)
    }
}

impl<P> Payload for &P
where
    P: Payload + ?Sized,
{
    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        (**self).render(out)
    }
}

/// Everything needed to render one record.
///
/// # Examples
///
/// ```rust
/// use veecle_log_output::{Entry, Level};
///
/// let data = [0xde, 0xad, 0xbe, 0xef];
/// let entry = Entry::new(Level::Warning, 42)
///     .domain("app")
///     .source("sensor")
///     .payload(&"checksum mismatch")
///     .data(&data);
/// ```
#[derive(Clone, Copy)]
pub struct Entry<'a> {
    /// Raw timestamp in ticks.
    pub timestamp: Ticks,
    /// Severity, or the raw string marker.
    pub level: Level,
    /// Name of the domain the record was created in.
    pub domain: Option<&'a str>,
    /// Name of the source (module or function) that created the record.
    pub source: Option<&'a str>,
    /// The message, if any.
    pub payload: Option<&'a dyn Payload>,
    /// Raw bytes printed as a hexdump.
    pub data: &'a [u8],
}

impl<'a> Entry<'a> {
    /// Creates an entry without domain, source, payload or data.
    pub fn new(level: Level, timestamp: Ticks) -> Self {
        Self {
            timestamp,
            level,
            domain: None,
            source: None,
            payload: None,
            data: &[],
        }
    }

    /// Sets the domain name.
    pub fn domain(mut self, domain: &'a str) -> Self {
        self.domain = Some(domain);
        self
    }

    /// Sets the source name.
    pub fn source(mut self, source: &'a str) -> Self {
        self.source = Some(source);
        self
    }

    /// Sets the message.
    pub fn payload(mut self, payload: &'a dyn Payload) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Sets the raw bytes to dump.
    pub fn data(mut self, data: &'a [u8]) -> Self {
        self.data = data;
        self
    }
}

impl fmt::Debug for Entry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("timestamp", &self.timestamp)
            .field("level", &self.level)
            .field("domain", &self.domain)
            .field("source", &self.source)
            .field("payload", &self.payload.is_some())
            .field("data", &self.data)
            .finish()
    }
}

/// Read access to a record held by the log store.
pub trait Record {
    /// Raw timestamp in ticks.
    fn timestamp(&self) -> Ticks;

    /// Severity, or the raw string marker.
    fn level(&self) -> Level;

    /// Identifier of the domain the record was created in.
    fn domain(&self) -> u8;

    /// Identifier of the source within its domain, `None` if the record has no source.
    fn source(&self) -> Option<u16>;

    /// The argument payload, `None` if the record carries no message.
    fn payload(&self) -> Option<&dyn Payload>;

    /// Raw bytes attached to the record.
    fn data(&self) -> &[u8];
}

/// Resolves source identifiers into names.
pub trait SourceNames {
    /// Returns the name of `source` within `domain`.
    fn source_name(&self, domain: u8, source: u16) -> Option<&str>;
}

/// No names are known.
impl SourceNames for () {
    fn source_name(&self, _domain: u8, _source: u16) -> Option<&str> {
        None
    }
}

/// A name table of a single domain, indexed by source identifier.
impl SourceNames for [&str] {
    fn source_name(&self, _domain: u8, source: u16) -> Option<&str> {
        self.get(usize::from(source)).copied()
    }
}

impl<const N: usize> SourceNames for [&str; N] {
    fn source_name(&self, domain: u8, source: u16) -> Option<&str> {
        self.as_slice().source_name(domain, source)
    }
}

#[cfg(test)]
mod tests {
    use std::string::String;

    use super::{Payload, SourceNames};

    #[test]
    fn payload_impls() {
        let mut out = String::new();

        "text ".render(&mut out).unwrap();
        format_args!("{} ", 42).render(&mut out).unwrap();
        (&&"nested").render(&mut out).unwrap();

        assert_eq!(out, "text 42 nested");
    }

    #[test]
    fn name_tables() {
        let names = ["main", "net"];

        assert_eq!(names.source_name(0, 1), Some("net"));
        assert_eq!(names.source_name(3, 0), Some("main"));
        assert_eq!(names.source_name(0, 2), None);
        assert_eq!(().source_name(0, 0), None);
    }
}

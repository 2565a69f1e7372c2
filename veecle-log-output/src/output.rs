use crate::buffer::{CrLf, OutputBuffer};
use crate::config::{ConfigError, MAX_HOSTNAME_LEN, MAX_TAG_LEN, OutputConfig, store};
use crate::prefix::{Style, postfix, prefix};
use crate::{Clock, Entry, FormatFlags, Level, Newlines, Record, Sink, SourceNames, Ticks};
use crate::{dropped, hexdump};

/// Renders log records into a [`Sink`].
///
/// Each record is rendered completely and flushed before the call returns, see [`LogOutput::process`].
/// Up to `N` bytes are buffered between flushes.
///
/// # Examples
///
/// ```rust
/// use veecle_log_output::{Entry, FormatFlags, Level, LogOutput};
///
/// let mut output = LogOutput::<heapless::Vec<u8, 256>, 64>::buffered(heapless::Vec::new());
/// output.set_tag(Some("node1"))?;
///
/// output.process(
///     &Entry::new(Level::Error, 7).source("can").payload(&"bus off"),
///     FormatFlags::LEVEL | FormatFlags::CRLF_LFONLY,
/// );
/// output.report_dropped(3);
///
/// assert_eq!(
///     output.sink().as_slice(),
///     b"node1 <err> can: bus off\n--- 3 messages dropped ---\r\n",
/// );
/// # Ok::<(), veecle_log_output::ConfigError>(())
/// ```
#[derive(Debug)]
pub struct LogOutput<S, const N: usize> {
    buffer: OutputBuffer<S, N>,
    clock: Clock,
    hostname: Option<heapless::String<MAX_HOSTNAME_LEN>>,
    tag: Option<heapless::String<MAX_TAG_LEN>>,
    info_green: bool,
    dropped_colors: bool,
}

impl<S, const N: usize> LogOutput<S, N> {
    /// Creates an output collecting each record in an `N` byte buffer before writing it to `sink`.
    ///
    /// `N` is required to be larger than 0.
    pub const fn buffered(sink: S) -> Self {
        Self::with_buffer(OutputBuffer::buffered(sink))
    }

    /// Creates an output writing every byte straight to `sink`.
    ///
    /// `sink` must tolerate being called from every context that logs, nothing serializes the writes.
    pub const fn immediate(sink: S) -> Self {
        Self::with_buffer(OutputBuffer::immediate(sink))
    }

    const fn with_buffer(buffer: OutputBuffer<S, N>) -> Self {
        Self {
            buffer,
            clock: Clock::UNCONFIGURED,
            hostname: None,
            tag: None,
            info_green: false,
            dropped_colors: false,
        }
    }

    /// Applies every setting of `config`.
    ///
    /// Nothing is changed if the configuration is rejected.
    pub fn configure(&mut self, config: &OutputConfig<'_>) -> Result<(), ConfigError> {
        let hostname = config
            .hostname
            .map(|hostname| {
                store(
                    hostname,
                    ConfigError::HostnameTooLong {
                        max: MAX_HOSTNAME_LEN,
                    },
                )
            })
            .transpose()?;
        let tag = config
            .tag
            .map(|tag| store(tag, ConfigError::TagTooLong { max: MAX_TAG_LEN }))
            .transpose()?;

        self.hostname = hostname;
        self.tag = tag;
        self.configure_frequency(config.frequency);
        self.info_green = config.info_green;
        self.dropped_colors = config.dropped_colors;

        Ok(())
    }

    /// Sets the frequency of the timestamp counter in Hz.
    ///
    /// A frequency of `0` disables formatted timestamps.
    pub fn configure_frequency(&mut self, frequency: u32) {
        self.clock = Clock::new(frequency);
    }

    /// Returns the clock used for timestamps.
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Converts `ticks` into microseconds using the configured frequency.
    pub fn ticks_to_microseconds(&self, ticks: Ticks) -> u64 {
        self.clock.to_micros(ticks)
    }

    /// Sets the hostname used in syslog headers.
    pub fn set_hostname(&mut self, hostname: Option<&str>) -> Result<(), ConfigError> {
        self.hostname = hostname
            .map(|hostname| {
                store(
                    hostname,
                    ConfigError::HostnameTooLong {
                        max: MAX_HOSTNAME_LEN,
                    },
                )
            })
            .transpose()?;
        Ok(())
    }

    /// Returns the hostname used in syslog headers.
    pub fn hostname(&self) -> Option<&str> {
        self.hostname.as_deref()
    }

    /// Sets the tag printed in front of every record.
    pub fn set_tag(&mut self, tag: Option<&str>) -> Result<(), ConfigError> {
        self.tag = tag
            .map(|tag| store(tag, ConfigError::TagTooLong { max: MAX_TAG_LEN }))
            .transpose()?;
        Ok(())
    }

    /// Returns the tag printed in front of every record.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Colors info records green when [`FormatFlags::COLORS`] is set.
    pub fn set_info_green(&mut self, info_green: bool) {
        self.info_green = info_green;
    }

    /// Prints dropped message notices in red.
    pub fn set_dropped_colors(&mut self, dropped_colors: bool) {
        self.dropped_colors = dropped_colors;
    }

    /// Returns the buffer in front of the sink.
    pub fn buffer(&self) -> &OutputBuffer<S, N> {
        &self.buffer
    }

    /// Returns a reference to the sink.
    pub fn sink(&self) -> &S {
        self.buffer.sink()
    }

    /// Returns a mutable reference to the sink.
    pub fn sink_mut(&mut self) -> &mut S {
        self.buffer.sink_mut()
    }

    /// Returns the sink.
    pub fn into_sink(self) -> S {
        self.buffer.into_sink()
    }
}

impl<S, const N: usize> LogOutput<S, N>
where
    S: Sink,
{
    /// Renders `entry` and flushes it to the sink.
    ///
    /// Regular records are rendered as header, message, hexdump of the data and footer.
    /// [`Level::RawString`] records consist of the message and the hexdump only.
    pub fn process(&mut self, entry: &Entry<'_>, flags: FormatFlags) {
        let margin = match entry.level {
            Level::RawString(newlines) => {
                if let Some(payload) = entry.payload {
                    let result = match newlines {
                        Newlines::Expand => payload.render(&mut CrLf(&mut self.buffer)),
                        Newlines::Verbatim => payload.render(&mut self.buffer),
                    };
                    debug_assert!(result.is_ok(), "malformed log payload");
                }
                0
            }
            _ => {
                let style = Style {
                    clock: self.clock,
                    tag: self.tag.as_deref(),
                    hostname: self.hostname.as_deref(),
                    info_green: self.info_green,
                };
                let margin = prefix(&mut self.buffer, &style, flags, entry);
                if let Some(payload) = entry.payload {
                    let result = payload.render(&mut self.buffer);
                    debug_assert!(result.is_ok(), "malformed log payload");
                }
                margin
            }
        };

        hexdump::render(&mut self.buffer, entry.data, margin, flags);

        if !entry.level.is_raw_string() {
            postfix(&mut self.buffer, flags);
        }

        self.buffer.flush();
    }

    /// Renders a record of the log store.
    ///
    /// The source name is resolved through `names`; domain names are not printed for stored records.
    pub fn process_record<R, T>(&mut self, record: &R, names: &T, flags: FormatFlags)
    where
        R: Record + ?Sized,
        T: SourceNames + ?Sized,
    {
        let source = record
            .source()
            .and_then(|source| names.source_name(record.domain(), source));

        self.process(
            &Entry {
                timestamp: record.timestamp(),
                level: record.level(),
                domain: None,
                source,
                payload: record.payload(),
                data: record.data(),
            },
            flags,
        );
    }

    /// Writes a notice about `count` lost records straight to the sink.
    ///
    /// Counts above [`dropped::MAX_DROPPED`] are clamped.
    pub fn report_dropped(&mut self, count: u32) {
        dropped::report(self.buffer.sink_mut(), count, self.dropped_colors);
    }

    /// Writes any buffered bytes to the sink.
    pub fn flush(&mut self) {
        self.buffer.flush();
    }
}

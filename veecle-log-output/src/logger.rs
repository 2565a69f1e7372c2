use crate::{Entry, FormatFlags, Level, SharedLogOutput, Sink, Ticks};

/// Routes the [`log`] facade into a [`SharedLogOutput`].
///
/// The record target is printed as the source name.
///
/// # Examples
///
/// ```rust
/// use veecle_log_output::{FormatFlags, Logger, SharedLogOutput};
///
/// static LOGGER: Logger<heapless::Vec<u8, 256>, 64> = Logger::new(
///     SharedLogOutput::buffered(heapless::Vec::new()),
///     FormatFlags::LEVEL.union(FormatFlags::CRLF_LFONLY),
///     || 0,
/// );
///
/// log::set_logger(&LOGGER)?;
/// log::set_max_level(log::LevelFilter::Info);
///
/// log::warn!(target: "sensor", "temperature at {} C", 85);
/// log::debug!("filtered");
///
/// LOGGER.output().lock(|output| {
///     assert_eq!(output.sink().as_slice(), b"<wrn> sensor: temperature at 85 C\n");
/// });
/// # Ok::<(), log::SetLoggerError>(())
/// ```
#[derive(Debug)]
pub struct Logger<S, const N: usize> {
    output: SharedLogOutput<S, N>,
    flags: FormatFlags,
    now: fn() -> Ticks,
}

impl<S, const N: usize> Logger<S, N> {
    /// Creates a logger rendering with `flags` and reading timestamps from `now`.
    pub const fn new(output: SharedLogOutput<S, N>, flags: FormatFlags, now: fn() -> Ticks) -> Self {
        Self { output, flags, now }
    }

    /// Returns the output records are rendered into.
    pub fn output(&self) -> &SharedLogOutput<S, N> {
        &self.output
    }
}

/// Trace records are printed as debug records.
fn level(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::Error,
        log::Level::Warn => Level::Warning,
        log::Level::Info => Level::Info,
        log::Level::Debug | log::Level::Trace => Level::Debug,
    }
}

impl<S, const N: usize> log::Log for Logger<S, N>
where
    S: Sink + Send,
{
    // Filtering is left to `log::set_max_level`.
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        self.output.process(
            &Entry::new(level(record.level()), (self.now)())
                .source(record.target())
                .payload(record.args()),
            self.flags,
        );
    }

    fn flush(&self) {
        self.output.lock(|output| output.flush());
    }
}

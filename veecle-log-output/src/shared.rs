use core::cell::RefCell;

use critical_section::Mutex;

use crate::{Entry, FormatFlags, LogOutput, Record, Sink, SourceNames};

/// A [`LogOutput`] that can be shared between contexts, for example placed in a `static`.
///
/// Every record is rendered inside a critical section, so records never interleave in the sink.
/// The `critical-section` implementation must be provided by the application.
///
/// Records emitted while the same output is already rendering (for example from a payload decoder that logs) are
/// dropped.
///
/// # Examples
///
/// ```rust
/// use veecle_log_output::{Entry, FormatFlags, Level, SharedLogOutput};
///
/// static OUTPUT: SharedLogOutput<heapless::Vec<u8, 128>, 32> = SharedLogOutput::buffered(heapless::Vec::new());
///
/// OUTPUT.process(&Entry::new(Level::Warning, 0).payload(&"low battery"), FormatFlags::LEVEL);
///
/// OUTPUT.lock(|output| assert_eq!(output.sink().as_slice(), b"<wrn> low battery\r\n"));
/// ```
#[derive(Debug)]
pub struct SharedLogOutput<S, const N: usize> {
    inner: Mutex<RefCell<LogOutput<S, N>>>,
}

impl<S, const N: usize> SharedLogOutput<S, N> {
    /// Wraps an existing output.
    pub const fn new(output: LogOutput<S, N>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(output)),
        }
    }

    /// Creates a shared output buffering each record, see [`LogOutput::buffered`].
    pub const fn buffered(sink: S) -> Self {
        Self::new(LogOutput::buffered(sink))
    }

    /// Creates a shared output writing every byte straight to `sink`, see [`LogOutput::immediate`].
    pub const fn immediate(sink: S) -> Self {
        Self::new(LogOutput::immediate(sink))
    }

    /// Runs `f` with exclusive access to the output.
    ///
    /// Returns `None` if the output is already in use by the current context.
    pub fn lock<R>(&self, f: impl FnOnce(&mut LogOutput<S, N>) -> R) -> Option<R> {
        critical_section::with(|cs| {
            let Ok(mut output) = self.inner.borrow(cs).try_borrow_mut() else {
                #[cfg(feature = "tracing")]
                tracing::warn!("log output is already rendering a record");
                return None;
            };
            Some(f(&mut *output))
        })
    }

    /// Returns the inner output.
    pub fn into_inner(self) -> LogOutput<S, N> {
        self.inner.into_inner().into_inner()
    }
}

impl<S, const N: usize> SharedLogOutput<S, N>
where
    S: Sink,
{
    /// Renders `entry`, see [`LogOutput::process`].
    pub fn process(&self, entry: &Entry<'_>, flags: FormatFlags) {
        self.lock(|output| output.process(entry, flags));
    }

    /// Renders a record of the log store, see [`LogOutput::process_record`].
    pub fn process_record<R, T>(&self, record: &R, names: &T, flags: FormatFlags)
    where
        R: Record + ?Sized,
        T: SourceNames + ?Sized,
    {
        self.lock(|output| output.process_record(record, names, flags));
    }

    /// Writes a dropped messages notice, see [`LogOutput::report_dropped`].
    pub fn report_dropped(&self, count: u32) {
        self.lock(|output| output.report_dropped(count));
    }
}

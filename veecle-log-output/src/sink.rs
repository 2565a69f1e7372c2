//! Byte-accepting transport targets.
//!
//! A [`Sink`] is the end of the rendering pipeline: a console, a UART, a socket or a file.
//! Sinks may accept fewer bytes than offered; callers go through [`write_all`], which loops until every byte was
//! taken.

/// A transport target for rendered log output.
///
/// # Examples
///
/// ```rust
/// use veecle_log_output::Sink;
///
/// /// Accepts at most four bytes per call.
/// #[derive(Debug, Default)]
/// struct Narrow(Vec<u8>);
///
/// impl Sink for Narrow {
///     fn write(&mut self, bytes: &[u8]) -> usize {
///         let accepted = bytes.len().min(4);
///         self.0.extend_from_slice(&bytes[..accepted]);
///         accepted
///     }
/// }
///
/// let mut sink = Narrow::default();
/// veecle_log_output::sink::write_all(&mut sink, b"0123456789");
/// assert_eq!(sink.0, b"0123456789");
/// ```
pub trait Sink {
    /// Writes a prefix of `bytes` and returns how many bytes were accepted.
    ///
    /// Accepting zero bytes is allowed for a single call, but a sink that never accepts anything stalls
    /// [`write_all`] forever.
    fn write(&mut self, bytes: &[u8]) -> usize;
}

impl<S> Sink for &mut S
where
    S: Sink + ?Sized,
{
    fn write(&mut self, bytes: &[u8]) -> usize {
        (**self).write(bytes)
    }
}

/// Hands `bytes` to `sink` until all of them were accepted.
pub fn write_all<S>(sink: &mut S, mut bytes: &[u8])
where
    S: Sink + ?Sized,
{
    #[cfg(feature = "tracing")]
    let mut stalled = false;

    while !bytes.is_empty() {
        let accepted = sink.write(bytes).min(bytes.len());

        #[cfg(feature = "tracing")]
        if accepted == 0 && !stalled {
            stalled = true;
            tracing::warn!(pending = bytes.len(), "log sink accepted no bytes, retrying");
        }

        bytes = &bytes[accepted..];
    }
}

/// A [`Sink`] calling a closure, see [`from_fn`].
#[derive(Debug, Clone)]
pub struct FromFn<F>(F);

/// Creates a [`Sink`] from a closure returning the number of accepted bytes.
///
/// ```rust
/// use veecle_log_output::sink;
///
/// let mut uart = Vec::new();
/// let mut sink = sink::from_fn(|bytes: &[u8]| {
///     uart.extend_from_slice(bytes);
///     bytes.len()
/// });
/// sink::write_all(&mut sink, b"boot\r\n");
/// assert_eq!(uart, b"boot\r\n");
/// ```
pub fn from_fn<F>(write: F) -> FromFn<F>
where
    F: FnMut(&[u8]) -> usize,
{
    FromFn(write)
}

impl<F> Sink for FromFn<F>
where
    F: FnMut(&[u8]) -> usize,
{
    fn write(&mut self, bytes: &[u8]) -> usize {
        (self.0)(bytes)
    }
}

/// Captures output up to a fixed capacity.
///
/// Bytes beyond the capacity are accepted and discarded.
impl<const N: usize> Sink for heapless::Vec<u8, N> {
    fn write(&mut self, bytes: &[u8]) -> usize {
        let room = N - self.len();
        let stored = bytes.len().min(room);
        // Cannot fail, `stored` fits the remaining capacity.
        let _ = self.extend_from_slice(&bytes[..stored]);
        bytes.len()
    }
}

#[cfg(feature = "alloc")]
impl Sink for alloc::vec::Vec<u8> {
    fn write(&mut self, bytes: &[u8]) -> usize {
        self.extend_from_slice(bytes);
        bytes.len()
    }
}

/// Adapts an [`embedded_io::Write`] target such as a UART.
///
/// Transport errors drop the offered bytes, a logger never retries a failed transport.
#[derive(Debug)]
pub struct IoSink<W>(pub W);

impl<W> IoSink<W> {
    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.0
    }
}

impl<W> Sink for IoSink<W>
where
    W: embedded_io::Write,
{
    fn write(&mut self, bytes: &[u8]) -> usize {
        // this is a logger, ignore any errors writing
        self.0.write(bytes).unwrap_or(bytes.len())
    }
}

/// Adapts a [`std::io::Write`] target such as [`std::io::stderr`] or a file.
///
/// Transport errors drop the offered bytes, a logger never retries a failed transport.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct StdSink<W>(pub W);

#[cfg(feature = "std")]
impl<W> StdSink<W> {
    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.0
    }
}

#[cfg(feature = "std")]
impl<W> Sink for StdSink<W>
where
    W: std::io::Write,
{
    fn write(&mut self, bytes: &[u8]) -> usize {
        match self.0.write(bytes) {
            Ok(accepted) => accepted,
            Err(error) if error.kind() == std::io::ErrorKind::Interrupted => 0,
            // this is a logger, ignore any errors writing
            Err(_) => bytes.len(),
        }
    }
}

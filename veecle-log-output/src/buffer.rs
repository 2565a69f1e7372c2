//! The buffered writer between formatting and the [`Sink`].
//!
//! All rendering goes through [`core::fmt::Write`], either on an [`OutputBuffer`] directly or through [`print`],
//! which additionally reports how many bytes were produced.
//!
//! # Synchronization
//!
//! Every mutating operation takes `&mut self`: one record is formatted and flushed before the next one can start
//! on the same buffer.
//! Sharing an output between interrupt handlers or threads requires [`SharedLogOutput`](crate::SharedLogOutput).

use core::fmt;

use crate::sink::{self, Sink};

/// How an [`OutputBuffer`] hands bytes to its sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Every byte is written to the sink as soon as it is produced.
    ///
    /// The sink must tolerate being called from every context that logs.
    Immediate,

    /// Bytes accumulate in the buffer until it is flushed or runs full.
    Buffered,
}

/// A fixed-capacity byte buffer in front of a [`Sink`].
///
/// The cursor always stays within `0..=N` and is reset to `0` after every flush.
#[derive(Debug)]
pub struct OutputBuffer<S, const N: usize> {
    sink: S,
    mode: Mode,
    cursor: usize,
    buffer: [u8; N],
}

impl<S, const N: usize> OutputBuffer<S, N> {
    /// Creates a buffer collecting up to `N` bytes between flushes.
    ///
    /// `N` is required to be larger than 0.
    pub const fn buffered(sink: S) -> Self {
        const {
            assert!(N > 0, "empty output buffer");
        }

        Self::new(sink, Mode::Buffered)
    }

    /// Creates a writer passing every byte straight to `sink`.
    pub const fn immediate(sink: S) -> Self {
        Self::new(sink, Mode::Immediate)
    }

    const fn new(sink: S, mode: Mode) -> Self {
        Self {
            sink,
            mode,
            cursor: 0,
            buffer: [0; N],
        }
    }

    /// Returns the mode this buffer was created with.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the number of buffered bytes.
    pub fn len(&self) -> usize {
        self.cursor
    }

    /// Returns `true` if no bytes are waiting for a flush.
    pub fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    /// Returns the number of bytes the buffer holds before it flushes on its own.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the buffered bytes.
    pub fn pending(&self) -> &[u8] {
        &self.buffer[..self.cursor]
    }

    /// Returns a reference to the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns a mutable reference to the sink.
    ///
    /// Bytes written to the sink directly bypass anything still buffered.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Returns the sink, discarding any buffered bytes.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S, const N: usize> OutputBuffer<S, N>
where
    S: Sink,
{
    /// Emits a single byte.
    ///
    /// In [`Mode::Buffered`] a full buffer is flushed before `byte` is stored.
    pub fn emit_byte(&mut self, byte: u8) {
        match self.mode {
            Mode::Immediate => sink::write_all(&mut self.sink, &[byte]),
            Mode::Buffered => {
                if self.cursor == N {
                    self.flush();
                }
                self.buffer[self.cursor] = byte;
                self.cursor += 1;
            }
        }
    }

    /// Emits every byte of `bytes`.
    pub fn emit(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.emit_byte(byte);
        }
    }

    /// Writes all buffered bytes to the sink and resets the cursor.
    pub fn flush(&mut self) {
        sink::write_all(&mut self.sink, &self.buffer[..self.cursor]);
        self.cursor = 0;
    }
}

impl<S, const N: usize> fmt::Write for OutputBuffer<S, N>
where
    S: Sink,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.emit(s.as_bytes());
        Ok(())
    }
}

/// Counts the bytes passing through to the wrapped writer.
struct Counter<'a, W: ?Sized> {
    inner: &'a mut W,
    written: usize,
}

impl<W> fmt::Write for Counter<'_, W>
where
    W: fmt::Write + ?Sized,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_str(s)?;
        self.written += s.len();
        Ok(())
    }
}

/// Renders `args` into `out` and returns the number of bytes produced.
///
/// ```rust
/// use veecle_log_output::buffer::print;
///
/// let mut line = String::new();
/// assert_eq!(print(&mut line, format_args!("<{}> ", "err")), 6);
/// assert_eq!(line, "<err> ");
/// ```
pub fn print<W>(out: &mut W, args: fmt::Arguments<'_>) -> usize
where
    W: fmt::Write + ?Sized,
{
    let mut counter = Counter {
        inner: out,
        written: 0,
    };
    let result = fmt::write(&mut counter, args);
    debug_assert!(result.is_ok(), "log output writers never fail");
    counter.written
}

/// Expands every `\n` into `\r\n` on its way to the wrapped writer.
#[derive(Debug)]
pub struct CrLf<'a, W: ?Sized>(pub &'a mut W);

impl<W> fmt::Write for CrLf<'_, W>
where
    W: fmt::Write + ?Sized,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut lines = s.split('\n');
        if let Some(first) = lines.next() {
            self.0.write_str(first)?;
        }
        for line in lines {
            self.0.write_str("\r\n")?;
            self.0.write_str(line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use core::fmt::Write;
    use std::string::String;
    use std::vec::Vec;

    use super::{CrLf, Mode, OutputBuffer, print};
    use crate::Sink;

    /// Records every write call separately.
    #[derive(Debug, Default)]
    struct Calls(Vec<Vec<u8>>);

    impl Sink for Calls {
        fn write(&mut self, bytes: &[u8]) -> usize {
            self.0.push(bytes.to_vec());
            bytes.len()
        }
    }

    #[test]
    fn full_buffer_flushes_before_next_byte() {
        let mut buffer = OutputBuffer::<_, 4>::buffered(Calls::default());

        buffer.emit(b"abcd");
        assert_eq!(buffer.len(), 4);
        assert!(buffer.sink().0.is_empty());

        buffer.emit_byte(b'e');
        assert_eq!(buffer.sink().0, [b"abcd".to_vec()]);
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.pending(), b"e");
    }

    #[test]
    fn flush_resets_cursor_and_skips_empty_writes() {
        let mut buffer = OutputBuffer::<_, 8>::buffered(Calls::default());

        buffer.emit(b"abc");
        buffer.flush();
        buffer.flush();

        assert!(buffer.is_empty());
        assert_eq!(buffer.sink().0, [b"abc".to_vec()]);
    }

    #[test]
    fn immediate_mode_writes_each_byte() {
        let mut buffer = OutputBuffer::<_, 4>::immediate(Calls::default());
        assert_eq!(buffer.mode(), Mode::Immediate);

        write!(buffer, "ok").unwrap();

        assert!(buffer.is_empty());
        assert_eq!(buffer.sink().0, [b"o".to_vec(), b"k".to_vec()]);
    }

    #[test]
    fn print_counts_bytes() {
        let mut buffer = OutputBuffer::<_, 4>::buffered(Calls::default());

        let length = print(&mut buffer, format_args!("{:02x} ", 0xAB_u8));
        assert_eq!(length, 3);

        let length = print(&mut buffer, format_args!("{}", "multiple chunks"));
        assert_eq!(length, 15);
    }

    #[test]
    fn crlf_expands_newlines() {
        let mut out = String::new();

        write!(CrLf(&mut out), "one\ntwo\n").unwrap();
        CrLf(&mut out).write_str("\nthree").unwrap();

        assert_eq!(out, "one\r\ntwo\r\n\r\nthree");
    }
}

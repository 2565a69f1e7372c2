//! # `veecle-log-output`
//!
//! Rendering of structured log records into a byte stream for a transport sink such as a console, a serial
//! port, a network socket or a file.
//!
//! The crate owns everything between a decoded log record and the bytes handed to the transport:
//!
//! - **Buffering**: formatted bytes accumulate in a fixed-capacity per-sink buffer and are flushed once per record
//!   (or earlier when the buffer runs full).
//! - **Timestamps**: raw ticks are converted into microseconds, a wall clock or an RFC 5424 calendar timestamp
//!   without floating point arithmetic.
//! - **Decoration**: timestamps, ANSI colors, severity tags, source names and syslog framing.
//! - **Hexdumps**: raw byte payloads are rendered as fixed-width hex and ASCII lines.
//! - **Drop notices**: standalone "messages dropped" notices.
//!
//! Encoding of the argument payload, storing and filtering records, and selecting backends are handled elsewhere;
//! they are reached only through the [`Payload`], [`Record`] and [`SourceNames`] traits.
//!
//! ## Feature Flags
//!
//! - `alloc` - Implement [`Sink`] for `Vec<u8>`
//! - `std` - Enable [`sink::StdSink`] for [`std::io::Write`] targets (implies `alloc`)
//! - `timestamp-64bit` - Use 64-bit [`Ticks`] instead of 32-bit ones
//! - `log` - Enable [`Logger`] to route the `log` facade through a [`SharedLogOutput`]
//! - `tracing` - Report diagnostics of this crate through `tracing`
//!
//! ## Basic Usage
//!
//! ```rust
//! use veecle_log_output::{Entry, FormatFlags, Level, LogOutput};
//!
//! let mut output = LogOutput::<heapless::Vec<u8, 128>, 32>::buffered(heapless::Vec::new());
//! output.configure_frequency(1000);
//!
//! output.process(
//!     &Entry::new(Level::Info, 1_500)
//!         .source("eth")
//!         .payload(&format_args!("link up at {} Mbit/s", 100)),
//!     FormatFlags::TIMESTAMP | FormatFlags::FORMAT_TIMESTAMP | FormatFlags::LEVEL,
//! );
//!
//! assert_eq!(
//!     output.sink().as_slice(),
//!     b"[00:00:01.500,000] <inf> eth: link up at 100 Mbit/s\r\n",
//! );
//! ```

#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

#[cfg(any(test, feature = "std"))]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod buffer;
pub mod calendar;
pub mod clock;
mod config;
pub mod dropped;
mod flags;
pub mod hexdump;
mod level;
#[cfg(feature = "log")]
mod logger;
mod output;
pub mod prefix;
mod record;
mod shared;
pub mod sink;
pub mod timestamp;

pub use buffer::{Mode, OutputBuffer};
pub use clock::{Clock, Ticks};
pub use config::{ConfigError, MAX_HOSTNAME_LEN, MAX_TAG_LEN, OutputConfig};
pub use flags::FormatFlags;
pub use level::{Level, Newlines};
#[cfg(feature = "log")]
pub use logger::Logger;
pub use output::LogOutput;
pub use record::{Entry, Payload, Record, SourceNames};
pub use shared::SharedLogOutput;
pub use sink::Sink;

//! Tick frequency configuration and tick arithmetic.
//!
//! Timestamps arrive as raw ticks of a monotonic counter.
//! A [`Clock`] knows the counter frequency and converts ticks into microseconds or clock components using
//! integer arithmetic only.

/// Raw timestamp of a log record, in ticks of the log clock.
#[cfg(not(feature = "timestamp-64bit"))]
pub type Ticks = u32;

/// Raw timestamp of a log record, in ticks of the log clock.
#[cfg(feature = "timestamp-64bit")]
pub type Ticks = u64;

/// Zero-padded decimal width of unformatted [`Ticks`].
#[cfg(not(feature = "timestamp-64bit"))]
pub const RAW_TICKS_WIDTH: usize = 8;

/// Zero-padded decimal width of unformatted [`Ticks`].
#[cfg(feature = "timestamp-64bit")]
pub const RAW_TICKS_WIDTH: usize = 16;

/// Frequency of the log clock.
///
/// Frequencies above [`Clock::MAX_FREQUENCY`] are scaled down by a power of two divisor applied to every tick
/// value before conversion.
/// Nothing below a microsecond is printed, and the smaller frequency keeps intermediate products from
/// overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Clock {
    frequency: u32,
    divisor: u32,
}

impl Default for Clock {
    fn default() -> Self {
        Self::UNCONFIGURED
    }
}

/// A tick value split into clock components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockTime {
    /// Whole seconds since the counter started.
    pub total_seconds: u64,
    /// Whole hours, not wrapped at 24.
    pub hours: u64,
    /// Minutes within the hour.
    pub minutes: u32,
    /// Seconds within the minute.
    pub seconds: u32,
    /// Milliseconds within the second.
    pub millis: u32,
    /// Microseconds within the millisecond.
    pub micros: u32,
}

impl ClockTime {
    /// Microseconds within the second.
    pub fn subsec_micros(&self) -> u32 {
        self.millis * 1000 + self.micros
    }
}

impl Clock {
    /// Highest frequency used for conversion, 1 MHz.
    pub const MAX_FREQUENCY: u32 = 1_000_000;

    /// A clock without a known frequency, formatted timestamps are omitted.
    pub const UNCONFIGURED: Self = Self {
        frequency: 0,
        divisor: 1,
    };

    /// Creates a clock ticking at `frequency` Hz.
    ///
    /// ```rust
    /// use veecle_log_output::Clock;
    ///
    /// let clock = Clock::new(32_000_000);
    /// assert_eq!(clock.frequency(), 1_000_000);
    /// assert_eq!(clock.divisor(), 32);
    /// ```
    pub const fn new(frequency: u32) -> Self {
        let mut frequency = frequency;
        let mut divisor = 1;
        while frequency > Self::MAX_FREQUENCY {
            frequency /= 2;
            divisor *= 2;
        }

        Self { frequency, divisor }
    }

    /// The effective frequency after scaling.
    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    /// The power of two every tick value is divided by before conversion.
    pub fn divisor(&self) -> u32 {
        self.divisor
    }

    /// Returns `true` once a non-zero frequency is known.
    pub fn is_configured(&self) -> bool {
        self.frequency != 0
    }

    /// Converts `ticks` into microseconds.
    ///
    /// An unconfigured clock converts everything to 0.
    /// Results beyond `u64::MAX` microseconds, only reachable with 64-bit ticks, saturate.
    pub fn to_micros(&self, ticks: Ticks) -> u64 {
        if !self.is_configured() {
            return 0;
        }

        let ticks = u64::from(ticks) / u64::from(self.divisor);
        let micros = u128::from(ticks) * 1_000_000 / u128::from(self.frequency);
        u64::try_from(micros).unwrap_or(u64::MAX)
    }

    /// Splits `ticks` into clock components, or `None` for an unconfigured clock.
    pub fn split(&self, ticks: Ticks) -> Option<ClockTime> {
        if !self.is_configured() {
            return None;
        }

        let frequency = u64::from(self.frequency);
        let ticks = u64::from(ticks) / u64::from(self.divisor);

        let total_seconds = ticks / frequency;
        let hours = total_seconds / 3600;
        let mut seconds = total_seconds - hours * 3600;
        let minutes = seconds / 60;
        seconds -= minutes * 60;

        let remainder = ticks % frequency;
        let millis = remainder * 1000 / frequency;
        // Only the part below the last full millisecond contributes here.
        let micros = 1000 * (remainder * 1000 - millis * frequency) / frequency;

        Some(ClockTime {
            total_seconds,
            hours,
            minutes: minutes as u32,
            seconds: seconds as u32,
            millis: millis as u32,
            micros: micros as u32,
        })
    }
}

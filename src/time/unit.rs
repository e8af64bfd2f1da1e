//! Time unit enumerations and conversions between them.

use std::time::Duration;

/// Fixed-rate time units, as used for timeouts and intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimeUnit {
    /// 10^-9 seconds.
    Nanoseconds,
    /// 10^-6 seconds.
    Microseconds,
    /// 10^-3 seconds.
    Milliseconds,
    /// One second.
    Seconds,
    /// 60 seconds.
    Minutes,
    /// 3600 seconds.
    Hours,
    /// 86400 seconds.
    Days,
}

impl TimeUnit {
    /// Length of one unit in nanoseconds.
    pub fn nanos(self) -> u64 {
        match self {
            TimeUnit::Nanoseconds => 1,
            TimeUnit::Microseconds => 1_000,
            TimeUnit::Milliseconds => 1_000_000,
            TimeUnit::Seconds => 1_000_000_000,
            TimeUnit::Minutes => 60 * 1_000_000_000,
            TimeUnit::Hours => 3_600 * 1_000_000_000,
            TimeUnit::Days => 86_400 * 1_000_000_000,
        }
    }

    /// `amount` of this unit as a [`Duration`], or `None` on overflow.
    ///
    /// ```rust
    /// use std::time::Duration;
    /// use person_attributes::time::TimeUnit;
    ///
    /// assert_eq!(TimeUnit::Minutes.to_duration(2), Some(Duration::from_secs(120)));
    /// assert_eq!(TimeUnit::Days.to_duration(u64::MAX), None);
    /// ```
    pub fn to_duration(self, amount: u64) -> Option<Duration> {
        let nanos = u128::from(amount).checked_mul(u128::from(self.nanos()))?;
        let secs = u64::try_from(nanos / 1_000_000_000).ok()?;
        // remainder is below 10^9
        let subsec = (nanos % 1_000_000_000) as u32;
        Some(Duration::new(secs, subsec))
    }
}

/// Calendar-aware temporal units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChronoUnit {
    /// Nanoseconds.
    Nanos,
    /// Microseconds.
    Micros,
    /// Milliseconds.
    Millis,
    /// Seconds.
    Seconds,
    /// Minutes.
    Minutes,
    /// Hours.
    Hours,
    /// Twelve hours (AM/PM).
    HalfDays,
    /// Days.
    Days,
    /// Weeks.
    Weeks,
    /// Months.
    Months,
    /// Years.
    Years,
    /// Ten years.
    Decades,
    /// A hundred years.
    Centuries,
    /// A thousand years.
    Millennia,
    /// Eras.
    Eras,
    /// Unbounded.
    Forever,
}

/// Maps a calendar unit to its fixed-rate counterpart.
///
/// Returns `None` for units with no [`TimeUnit`] equivalent (half days and
/// anything longer than a day).
#[deprecated(note = "transition helper; use `TimeUnit` or `ChronoUnit` directly")]
pub fn to_time_unit(unit: ChronoUnit) -> Option<TimeUnit> {
    match unit {
        ChronoUnit::Nanos => Some(TimeUnit::Nanoseconds),
        ChronoUnit::Micros => Some(TimeUnit::Microseconds),
        ChronoUnit::Millis => Some(TimeUnit::Milliseconds),
        ChronoUnit::Seconds => Some(TimeUnit::Seconds),
        ChronoUnit::Minutes => Some(TimeUnit::Minutes),
        ChronoUnit::Hours => Some(TimeUnit::Hours),
        ChronoUnit::Days => Some(TimeUnit::Days),
        _ => None,
    }
}

/// Maps a fixed-rate unit to its calendar counterpart.
#[deprecated(note = "transition helper; use `TimeUnit` or `ChronoUnit` directly")]
pub fn to_chrono_unit(unit: TimeUnit) -> ChronoUnit {
    match unit {
        TimeUnit::Nanoseconds => ChronoUnit::Nanos,
        TimeUnit::Microseconds => ChronoUnit::Micros,
        TimeUnit::Milliseconds => ChronoUnit::Millis,
        TimeUnit::Seconds => ChronoUnit::Seconds,
        TimeUnit::Minutes => ChronoUnit::Minutes,
        TimeUnit::Hours => ChronoUnit::Hours,
        TimeUnit::Days => ChronoUnit::Days,
    }
}

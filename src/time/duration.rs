use std::fmt::{self, Display, Formatter, Write};
use std::time::Duration;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// A [`Duration`] split into whole units. Sub-millisecond precision is truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Parts {
    days: u64,
    hours: u64,
    minutes: u64,
    seconds: u64,
    millis: u32,
}

impl From<Duration> for Parts {
    fn from(value: Duration) -> Self {
        let secs = value.as_secs();
        Parts {
            days: secs / SECS_PER_DAY,
            hours: secs % SECS_PER_DAY / SECS_PER_HOUR,
            minutes: secs % SECS_PER_HOUR / SECS_PER_MINUTE,
            seconds: secs % SECS_PER_MINUTE,
            millis: value.subsec_millis(),
        }
    }
}

/// Displays a [`Duration`] in the short `d:hh:mm:ss.mmm` form, returned by
/// [`DurationExt::short`].
///
/// Only the units from the largest non-zero one down are shown, and only units following a larger
/// one are zero-padded:
///
/// | Largest unit | Form |
/// |-|-|
/// | days | `d:hh:mm:ss` |
/// | hours | `h:mm:ss` |
/// | minutes | `m:ss` |
/// | seconds | `s` |
///
/// Milliseconds are appended as `.mmm` when non-zero. Width, fill and alignment flags apply to the
/// whole rendering, as they do for a [`str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortDuration(pub Duration);

impl ShortDuration {
    fn render(&self, f: &mut impl Write) -> fmt::Result {
        let Parts { days, hours, minutes, seconds, millis } = Parts::from(self.0);

        if days != 0 {
            write!(f, "{days}:{hours:02}:{minutes:02}:{seconds:02}")?;
        } else if hours != 0 {
            write!(f, "{hours}:{minutes:02}:{seconds:02}")?;
        } else if minutes != 0 {
            write!(f, "{minutes}:{seconds:02}")?;
        } else {
            write!(f, "{seconds}")?;
        }

        if millis != 0 {
            write!(f, ".{millis:03}")?;
        }
        Ok(())
    }
}

impl Display for ShortDuration {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut buf = String::new();
        self.render(&mut buf)?;
        f.pad(&buf)
    }
}

/// Displays a [`Duration`] as space separated units such as `1d 2h 3.500s`, returned by
/// [`DurationExt::long`]. Zero units are skipped, and a zero duration renders as `0s`. Formatting
/// flags behave as for [`ShortDuration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LongDuration(pub Duration);

impl LongDuration {
    fn render(&self, f: &mut impl Write) -> fmt::Result {
        let Parts { days, hours, minutes, seconds, millis } = Parts::from(self.0);

        let mut sep = "";
        for (value, unit) in [(days, 'd'), (hours, 'h'), (minutes, 'm')] {
            if value != 0 {
                write!(f, "{sep}{value}{unit}")?;
                sep = " ";
            }
        }

        match (seconds, millis) {
            (0, 0) if !sep.is_empty() => Ok(()),
            (_, 0) => write!(f, "{sep}{seconds}s"),
            _ => write!(f, "{sep}{seconds}.{millis:03}s"),
        }
    }
}

impl Display for LongDuration {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut buf = String::new();
        self.render(&mut buf)?;
        f.pad(&buf)
    }
}

/// Formatting extensions for [`Duration`].
///
/// # Examples
/// ```
/// # use std::time::Duration;
/// # use standard_ext::time::DurationExt;
/// assert_eq!(Duration::ZERO.to_short_string(), "0");
/// assert_eq!(Duration::from_secs(90).to_short_string(), "1:30");
/// assert_eq!(Duration::from_secs(90).to_long_string(), "1m 30s");
/// assert_eq!(format!("[{}]", Duration::from_millis(1500).short()), "[1.500]");
/// ```
pub trait DurationExt {
    /// Returns a [`Display`] adapter for the short form, see [`ShortDuration`].
    fn short(&self) -> ShortDuration;

    /// Returns a [`Display`] adapter for the long form, see [`LongDuration`].
    fn long(&self) -> LongDuration;

    /// Renders the short form into a new [`String`].
    fn to_short_string(&self) -> String {
        self.short().to_string()
    }

    /// Renders the long form into a new [`String`].
    fn to_long_string(&self) -> String {
        self.long().to_string()
    }
}

impl DurationExt for Duration {
    fn short(&self) -> ShortDuration {
        ShortDuration(*self)
    }

    fn long(&self) -> LongDuration {
        LongDuration(*self)
    }
}

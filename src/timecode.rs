//! Timer readings in `HH:MM:SS.mmm` form.
//!
//! Parsing is purely syntactic unless [`ParseOptions::strict_ranges`] is set:
//! `99:99:99.999` is accepted and simply converts to more seconds than its
//! fields suggest.

use crate::error::{Component, FormatError};

/// Options controlling how strictly a time string is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject minutes or seconds of 60 and above.
    pub strict_ranges: bool,
}

/// A parsed timer reading, split into its exact whole seconds and the
/// millisecond fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Timecode {
    whole_seconds: u64,
    milliseconds: u64,
}

impl Timecode {
    #[allow(clippy::cast_precision_loss)]
    fn total_seconds(self) -> f64 {
        self.whole_seconds as f64 + self.milliseconds as f64 / 1000.0
    }
}

/// Parses `HH:MM:SS.mmm` into its total number of seconds.
///
/// # Errors
///
/// Returns a [`FormatError`] describing the first deviation from the
/// expected pattern.
pub fn parse_time(input: &str, options: ParseOptions) -> Result<f64, FormatError> {
    parse_timecode(input, options).map(|t| t.total_seconds())
}

/// Hours take two or more digits, minutes and seconds exactly two,
/// milliseconds exactly three. Signs, whitespace and any other character
/// are rejected.
fn parse_timecode(input: &str, options: ParseOptions) -> Result<Timecode, FormatError> {
    let parts: Vec<&str> = input.split(':').collect();
    let [hours_str, minutes_str, sec_ms_str] = parts.as_slice() else {
        return Err(FormatError::WrongSeparatorCount {
            input: input.to_string(),
        });
    };

    let Some((seconds_str, ms_str)) = sec_ms_str
        .split_once('.')
        .filter(|(_, ms)| !ms.contains('.'))
    else {
        return Err(FormatError::MissingFraction {
            input: input.to_string(),
        });
    };

    let overflow = || FormatError::Overflow {
        input: input.to_string(),
    };

    let hours = component(hours_str, Component::Hours)?.ok_or_else(overflow)?;
    let minutes = component(minutes_str, Component::Minutes)?.ok_or_else(overflow)?;
    let seconds = component(seconds_str, Component::Seconds)?.ok_or_else(overflow)?;
    let milliseconds = component(ms_str, Component::Milliseconds)?.ok_or_else(overflow)?;

    if options.strict_ranges {
        for (component, value) in [(Component::Minutes, minutes), (Component::Seconds, seconds)] {
            if value >= 60 {
                return Err(FormatError::OutOfRange { component, value });
            }
        }
    }

    let whole_seconds = hours
        .checked_mul(3600)
        .and_then(|h| h.checked_add(minutes * 60))
        .and_then(|hm| hm.checked_add(seconds))
        .ok_or_else(overflow)?;

    tracing::trace!(input, whole_seconds, milliseconds, "parsed time string");

    Ok(Timecode {
        whole_seconds,
        milliseconds,
    })
}

/// Validates one component's characters and width, then parses it.
///
/// `Ok(None)` means the digits were well formed but do not fit in a `u64`.
fn component(text: &str, which: Component) -> Result<Option<u64>, FormatError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatError::NonNumeric {
            component: which,
            text: text.to_string(),
        });
    }

    let (width_ok, expected) = match which {
        Component::Hours => (text.len() >= 2, "at least 2"),
        Component::Minutes | Component::Seconds => (text.len() == 2, "exactly 2"),
        Component::Milliseconds => (text.len() == 3, "exactly 3"),
    };
    if !width_ok {
        return Err(FormatError::WrongWidth {
            component: which,
            text: text.to_string(),
            expected,
        });
    }

    Ok(text.parse().ok())
}

/// Renders whole seconds as `hh:mm:ss`. Fractions are truncated.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_hms(seconds: f64) -> String {
    let total = seconds.trunc() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

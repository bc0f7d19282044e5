//! Nearest-legal-time matching.

use serde::Serialize;

/// Outcome of comparing a reading against the legal times.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchResult {
    /// Legal time with the smallest deviation from the input.
    pub closest: f64,
    /// Absolute difference between the input and `closest`.
    pub deviation: f64,
    /// `deviation <= tolerance`.
    pub accepted: bool,
}

/// Finds the legal time nearest to `input_seconds` and checks it against
/// `tolerance`.
///
/// On exact ties the earliest entry in `legal_times` wins. Returns `None`
/// only when `legal_times` is empty.
#[must_use]
pub fn find_closest(input_seconds: f64, legal_times: &[f64], tolerance: f64) -> Option<MatchResult> {
    let mut best: Option<(f64, f64)> = None;
    for &legal in legal_times {
        let delta = (input_seconds - legal).abs();
        if best.is_none_or(|(_, smallest)| delta < smallest) {
            best = Some((legal, delta));
        }
    }

    best.map(|(closest, deviation)| MatchResult {
        closest,
        deviation,
        accepted: deviation <= tolerance,
    })
}

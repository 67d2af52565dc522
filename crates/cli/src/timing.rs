// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test duration derivation.

use chrono::{DateTime, FixedOffset};

/// Duration in seconds for a `pass`/`fail` event.
///
/// A positive `elapsed` reported by the runner wins. Otherwise the delta
/// between the most recent `run` and the terminal event is used when both
/// timestamps are known, clamped at zero. Otherwise zero.
pub fn derive_duration(
    elapsed: f64,
    start: Option<DateTime<FixedOffset>>,
    end: Option<DateTime<FixedOffset>>,
) -> f64 {
    if elapsed > 0.0 {
        return elapsed;
    }

    match (start, end) {
        (Some(start), Some(end)) => {
            let delta = end.signed_duration_since(start);
            match delta.to_std() {
                Ok(d) => d.as_secs_f64(),
                // Negative delta (clock skew or reordered events)
                Err(_) => 0.0,
            }
        }
        _ => 0.0,
    }
}

#[cfg(test)]
#[path = "timing_tests.rs"]
mod tests;

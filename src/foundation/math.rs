/// Clamped linear progress of `pos` through `[start, end]`.
///
/// Positions before `start` report 0. A degenerate range (`end <= start`)
/// counts as fully progressed for every position at or past `start`, so the
/// result is never NaN.
pub fn clamp_progress(pos: f64, start: f64, end: f64) -> f64 {
    if pos < start {
        return 0.0;
    }
    let span = end - start;
    if span <= 0.0 || pos > end {
        return 1.0;
    }
    (pos - start) / span
}

/// Round half away from zero to `decimals` places.
///
/// Exact negative halves round down (`-0.125` to 2 places is `-0.13`), unlike
/// a round-half-up scheme that would give `-0.12`.
pub fn round_to(v: f64, decimals: u32) -> f64 {
    let k = 10f64.powi(decimals as i32);
    (v * k).round() / k
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;

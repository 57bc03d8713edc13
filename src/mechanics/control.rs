//! Control mechanics: clamped proportional steps and band tests.

/// Proportional step along a signed gap: x' = clamp(x + k * gap).
///
/// A NaN step (NaN `x`, `gap` or `k`) lands on `lo`, so the result is always
/// inside `[lo, hi]`. `lo <= hi` is required; `f64::clamp` panics otherwise.
#[inline]
pub fn nudge(x: f64, gap: f64, k: f64, lo: f64, hi: f64) -> f64 {
    let next = x + k * gap;
    if next.is_nan() { lo } else { next.clamp(lo, hi) }
}

/// Inclusive band test: lo <= x <= hi. NaN is never in band.
#[inline]
pub fn in_band(x: f64, lo: f64, hi: f64) -> bool {
    lo <= x && x <= hi
}

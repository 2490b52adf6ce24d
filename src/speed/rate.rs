//! Rate bounds and the arithmetic behind every speed change.
//!
//! Everything here is pure: no element access, no logging. The controller
//! composes these into the public operations.

/// Slowest rate the controller will ever apply.
pub const MIN_RATE: f64 = 0.25;

/// Fastest rate the controller will ever apply.
pub const MAX_RATE: f64 = 4.0;

/// Normal playback speed.
pub const DEFAULT_RATE: f64 = 1.0;

/// Clamp a requested rate into `[MIN_RATE, MAX_RATE]`.
///
/// Computed as `max(MIN_RATE, min(MAX_RATE, requested))`. NaN is not
/// rejected here; `f64::min` drops it and the result is `MAX_RATE`, so
/// callers that care must check first.
#[inline]
pub fn clamp_rate(requested: f64) -> f64 {
    MIN_RATE.max(MAX_RATE.min(requested))
}

/// Rate reached by doubling `current`, capped at `MAX_RATE`.
///
/// Also lifted to `MIN_RATE` so a rate set below the floor by another actor
/// still lands in range.
#[inline]
pub fn doubled(current: f64) -> f64 {
    clamp_rate(current * 2.0)
}

/// Interpret a raw rate property the way callers read it.
///
/// A missing property, zero, or NaN all read as `DEFAULT_RATE`.
#[inline]
pub fn effective_rate(raw: Option<f64>) -> f64 {
    match raw {
        Some(rate) if rate != 0.0 && !rate.is_nan() => rate,
        _ => DEFAULT_RATE,
    }
}

/// Format a rate for the speed label: two decimals and an `x` suffix.
///
/// Halfway cases round away from zero, so `0.625` reads `0.63x`.
pub fn format_rate(speed: f64) -> String {
    // The only values exactly halfway between two cents are odd multiples of 1/8
    let eighths = speed * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        return format!("{:.2}x", (speed * 100.0).round() / 100.0);
    }
    format!("{:.2}x", speed)
}

/// Read the number a speed value starts with, ignoring anything after it.
///
/// Leading whitespace is skipped. `"2x"` reads as 2.0 and `"1.5 fast"` as 1.5;
/// `"x2"` and `""` read as nothing.
pub fn parse_leading_rate(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if text[end..].starts_with("Infinity") {
        return text[..end + "Infinity".len()].parse().ok();
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    if bytes.get(end) == Some(&b'.') {
        let frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if !bytes[..end].iter().any(u8::is_ascii_digit) {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Whether a button's stored speed selects `speed`.
///
/// Exact equality, no tolerance: `1.5` matches `1.5` but not `1.5000001`.
#[inline]
#[allow(clippy::float_cmp)]
pub fn rate_matches(button_speed: f64, speed: f64) -> bool {
    button_speed == speed
}

//! Number formatting helpers for HUD text.

/// Left-pad the decimal form of `number` with zeros up to `width` characters.
///
/// Longer numbers are returned unchanged. For negative numbers the sign
/// stays in front and counts toward `width`, so `-7` at width 3 is `"-07"`.
pub fn pad_with_zeros(number: i64, width: usize) -> String {
    let digits = number.unsigned_abs().to_string();
    let sign = if number < 0 { "-" } else { "" };
    let zeros = width.saturating_sub(sign.len() + digits.len());

    let mut out = String::with_capacity(sign.len() + zeros + digits.len());
    out.push_str(sign);
    out.push_str(&"0".repeat(zeros));
    out.push_str(&digits);
    out
}

/// Zero-padded `mm:ss` clock for run timers, e.g. 125 -> `"02:05"`.
///
/// Minutes keep growing past 99 rather than wrapping.
pub fn format_clock(total_seconds: u64) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!(
        "{}:{}",
        pad_with_zeros(minutes as i64, 2),
        pad_with_zeros(seconds as i64, 2)
    )
}

// Number rendering for the short-stats line.

use num_format::{Locale, ToFormattedString};

/// Render `value` in its shortest decimal form with a `,` between every group
/// of three integer digits, e.g. `1234567` becomes `1,234,567`.
///
/// Fractional digits are left untouched and a leading minus sign never gets a
/// separator after it. Non-finite values are returned as Rust prints them.
pub fn format_number(value: f64) -> String {
    // normalise -0.0 so it doesn't print as "-0"
    let value = if value == 0.0 { 0.0 } else { value };
    let text = value.to_string();
    let whole = value.trunc();
    // Past the i128 range (and for NaN/inf) the plain text is returned as is.
    if !value.is_finite() || whole.abs() >= i128::MAX as f64 {
        return text;
    }

    let mut out = String::with_capacity(text.len() + text.len() / 3);
    // -0.5 truncates to 0, which would drop the sign
    if value < 0.0 && whole == 0.0 {
        out.push('-');
    }
    out.push_str(&(whole as i128).to_formatted_string(&Locale::en));
    if let Some((_, frac)) = text.split_once('.') {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Render a percentage with exactly two decimals, grouping the integer part
/// like [`format_number`]. The hundredths are rounded half away from zero, so
/// `12.345` becomes `12.35` and `0.125` becomes `0.13`.
pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();
    let mut whole = magnitude.trunc();
    // f64::round ties away from zero
    let mut hundredths = ((magnitude - whole) * 100.0).round();
    if hundredths >= 100.0 {
        whole += 1.0;
        hundredths -= 100.0;
    }

    format!("{}{}.{:02}", sign, format_number(whole), hundredths as u32)
}

//! Lenient conversion of user-typed money amounts.

/// Coerce raw input into a non-negative amount.
///
/// Leading whitespace is skipped and the longest numeric prefix is used, so
/// `"12.5 EUR"` becomes 12.5. Input without a numeric prefix, negative
/// numbers and non-finite values all become 0.
pub fn coerce_amount(input: &str) -> f64 {
    let trimmed = input.trim_start();
    let prefix = &trimmed[..numeric_prefix_len(trimmed)];

    match prefix.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}

/// Length in bytes of the leading `[sign] digits [. digits] [exponent]` run.
/// Returns 0 when the run contains no digit.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        digits += j - frac_start;
        i = j;
    }

    if digits == 0 {
        return 0;
    }

    // Exponent only counts when at least one digit follows it.
    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}

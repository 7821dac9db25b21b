// Shared helpers for the text formats: angular momentum letters, Fortran
// floats, comment stripping and fixed-width number formatting.

/// Shell letters indexed by angular momentum.
pub(crate) const AM_LETTERS: [char; 13] =
    ['S', 'P', 'D', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O'];

pub(crate) fn am_letter(am: u32) -> Option<char> {
    AM_LETTERS.get(am as usize).copied()
}

/// Angular momentum for a single shell letter, case-insensitive.
pub(crate) fn am_from_letter(s: &str) -> Option<u32> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => AM_LETTERS
            .iter()
            .position(|&l| l == c.to_ascii_uppercase())
            .map(|p| p as u32),
        _ => None,
    }
}

/// Parse a real number that may use `d`/`D` as exponent marker.
pub(crate) fn parse_fortran_float(token: &str) -> Option<f64> {
    token.replace(['d', 'D'], "e").parse::<f64>().ok()
}

/// Drop lines starting with '!' and trim the rest. Line numbers (1-based) are
/// kept so errors can point at the original text.
pub(crate) fn strip_comments(text: &str) -> Vec<(usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.starts_with('!'))
        .collect()
}

/// General format with forced sign slot and kept trailing zeros, right
/// aligned in `width` columns.
///
/// Positive values get a leading blank where the minus sign would go. Like
/// printf's `% #W.PG`: scientific notation when the decimal exponent is below
/// -4 or at least `precision`, fixed notation with `precision` significant
/// digits otherwise.
pub(crate) fn format_general(value: f64, width: usize, precision: usize) -> String {
    let precision = precision.max(1);
    let sign = if value.is_sign_negative() && value != 0.0 { "-" } else { " " };
    let magnitude = value.abs();

    // Exponent after rounding to `precision` significant digits.
    let sci = format!("{:.*e}", precision - 1, magnitude);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m.to_string(), e.parse::<i32>().unwrap_or(0)),
        None => (sci.clone(), 0),
    };

    let body = if exp < -4 || exp >= precision as i32 {
        let mantissa = if mantissa.contains('.') {
            mantissa
        } else {
            format!("{}.", mantissa)
        };
        let exp_sign = if exp < 0 { '-' } else { '+' };
        format!("{}E{}{:02}", mantissa, exp_sign, exp.abs())
    } else {
        let decimals = (precision as i32 - 1 - exp) as usize;
        let fixed = format!("{:.*}", decimals, magnitude);
        if decimals == 0 {
            format!("{}.", fixed)
        } else {
            fixed
        }
    };

    format!("{:>width$}", format!("{}{}", sign, body), width = width)
}

/// Split a line on runs of whitespace, like TetGen's own readers do.
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

pub fn parse_int(token: &str) -> Result<i64, String> {
    token
        .parse::<i64>()
        .map_err(|_| format!("expected integer, found `{token}`"))
}

pub fn parse_float(token: &str) -> Result<f64, String> {
    token
        .parse::<f64>()
        .map_err(|_| format!("expected number, found `{token}`"))
}

/// Render a float as the shortest decimal that round-trips.
///
/// Layout: fixed notation with at least one fractional digit when the
/// decimal exponent lies in `[-4, 16)`, otherwise scientific notation with
/// a signed, zero-padded two-digit exponent. So `1.0` stays `1.0`, `1e-5`
/// becomes `1e-05` and `1.5e16` becomes `1.5e+16`.
pub fn format_float(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let sign = if v.is_sign_negative() { "-" } else { "" };
    if v == 0.0 {
        return format!("{sign}0.0");
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e-5"
    let sci = format!("{:e}", v.abs());
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    if (-4..16).contains(&exp) {
        let (int_part, frac_part) = if exp >= 0 {
            let point = exp as usize + 1;
            if digits.len() <= point {
                (format!("{digits:0<point$}"), "0".to_string())
            } else {
                (digits[..point].to_string(), digits[point..].to_string())
            }
        } else {
            let zeros = "0".repeat((-exp - 1) as usize);
            ("0".to_string(), format!("{zeros}{digits}"))
        };
        format!("{sign}{int_part}.{frac_part}")
    } else {
        let (head, tail) = digits.split_at(1);
        let exp_sign = if exp < 0 { '-' } else { '+' };
        let exp_abs = exp.abs();
        if tail.is_empty() {
            format!("{sign}{head}e{exp_sign}{exp_abs:02}")
        } else {
            format!("{sign}{head}.{tail}e{exp_sign}{exp_abs:02}")
        }
    }
}

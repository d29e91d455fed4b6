// crates/rdvz-core/src/export/number.rs
//
// Number rendering for exported tuples. The default reproduces a default
// C++ ostream (printf "%g", 6 significant digits), which is what plot
// markup written against the legacy files expects:
//   100000 -> "100000", 123456.789 -> "123457", 1234567 -> "1.23457e+06"

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumberFormat {
    /// `%g` with the given significant digits (trailing zeros stripped).
    Significant(usize),
    /// Shortest representation that round-trips through `f64::from_str`.
    Shortest,
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat::Significant(6)
    }
}

impl NumberFormat {
    pub fn format(&self, x: f64) -> String {
        match *self {
            NumberFormat::Significant(digits) => format_general(x, digits),
            NumberFormat::Shortest => format!("{x}"),
        }
    }
}

pub fn format_general(x: f64, digits: usize) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf".into() } else { "-inf".into() };
    }
    if x == 0.0 {
        return if x.is_sign_negative() { "-0".into() } else { "0".into() };
    }

    let p = digits.max(1);
    // Rounding to p digits first decides the exponent (9.999995 -> 10).
    let sci = format!("{:.*e}", p - 1, x);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= p as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", strip_zeros(mantissa), sign, exp.unsigned_abs())
    } else {
        let decimals = (p as i32 - 1 - exp).max(0) as usize;
        strip_zeros(&format!("{:.*}", decimals, x)).to_string()
    }
}

fn strip_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

//! SI-prefixed value parsing and formatting.
//!
//! Component values are written the way they are printed on parts:
//! `10k`, `100u`, `4.7n`, `2.2`. Suffixes are case-sensitive (`m` is milli,
//! `M` is mega).

use crate::error::{CircuitError, Result};

const PREFIXES: [(char, f64); 8] = [
    ('G', 1e9),
    ('M', 1e6),
    ('k', 1e3),
    ('m', 1e-3),
    ('u', 1e-6),
    ('n', 1e-9),
    ('p', 1e-12),
    ('f', 1e-15),
];

fn multiplier(suffix: char) -> Option<f64> {
    match suffix {
        'µ' => Some(1e-6),
        'K' => Some(1e3),
        _ => PREFIXES.iter().find(|(c, _)| *c == suffix).map(|(_, m)| *m),
    }
}

/// Parse a number with an optional SI suffix.
pub fn parse_value(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let invalid = || CircuitError::InvalidValue {
        text: text.to_string(),
    };

    let last = trimmed.chars().last().ok_or_else(invalid)?;
    let (num_str, mult) = match multiplier(last) {
        Some(mult) => (&trimmed[..trimmed.len() - last.len_utf8()], mult),
        None => (trimmed, 1.0),
    };

    num_str
        .parse::<f64>()
        .map(|v| v * mult)
        .map_err(|_| invalid())
}

/// Format a value with the closest SI prefix and a unit, e.g. `4.70 kΩ`.
pub fn format_si(value: f64, unit: &str) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{} {}", value, unit);
    }

    let magnitude = value.abs();
    if (1.0..1e3).contains(&magnitude) {
        return format!("{:.3} {}", value, unit);
    }
    for (prefix, mult) in PREFIXES {
        if magnitude >= mult {
            let prefix = if prefix == 'u' { 'µ' } else { prefix };
            return format!("{:.3} {}{}", value / mult, prefix, unit);
        }
    }
    format!("{:.3e} {}", value, unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < b.abs() * 1e-10 + 1e-15
    }

    #[test]
    fn test_parse_value() {
        assert!(approx_eq(parse_value("10k").unwrap(), 10_000.0));
        assert!(approx_eq(parse_value("100n").unwrap(), 100e-9));
        assert!(approx_eq(parse_value("4.7u").unwrap(), 4.7e-6));
        assert!(approx_eq(parse_value("100µ").unwrap(), 100e-6));
        assert!(approx_eq(parse_value("100m").unwrap(), 0.1));
        assert!(approx_eq(parse_value("1M").unwrap(), 1_000_000.0));
        assert!(approx_eq(parse_value("2.2").unwrap(), 2.2));
        assert!(approx_eq(parse_value("1e-9").unwrap(), 1e-9));
        assert!(approx_eq(parse_value(" -5 ").unwrap(), -5.0));
    }

    #[test]
    fn test_parse_value_rejects_garbage() {
        assert!(parse_value("").is_err());
        assert!(parse_value("k").is_err());
        assert!(matches!(parse_value("10q"), Err(CircuitError::InvalidValue { .. })));
    }

    #[test]
    fn test_format_si() {
        assert_eq!(format_si(4700.0, "Ω"), "4.700 kΩ");
        assert_eq!(format_si(100e-6, "F"), "100.000 µF");
        assert_eq!(format_si(0.1, "H"), "100.000 mH");
        assert_eq!(format_si(10.0, "V"), "10.000 V");
        assert_eq!(format_si(-0.002, "A"), "-2.000 mA");
        assert_eq!(format_si(0.0, "s"), "0 s");
    }
}

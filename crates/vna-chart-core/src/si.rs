// File: crates/vna-chart-core/src/si.rs
// Summary: SI-prefixed number formatting for axis labels and readouts.

const PREFIXES: [&str; 10] = ["f", "p", "n", "µ", "m", "", "k", "M", "G", "T"];
const UNIT_INDEX: i32 = 5;

/// Format `value` with an SI prefix and at most `digits` significant digits,
/// e.g. `format_si(1.234e-9, 3) == "1.23n"`.
pub fn format_si(value: f64, digits: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return format!("{value}");
    }
    let digits = digits.max(1) as i32;
    let max_exp = PREFIXES.len() as i32 - 1 - UNIT_INDEX;
    let mut exp3 = ((value.abs().log10() / 3.0).floor() as i32).clamp(-UNIT_INDEX, max_exp);
    loop {
        let scaled = value / 10f64.powi(3 * exp3);
        let int_digits = (scaled.abs().log10().floor() as i32 + 1).max(1);
        let decimals = (digits - int_digits).max(0) as usize;
        let text = format!("{:.*}", decimals, scaled);
        // 999.7 rounds to "1000": move up one prefix and format again
        let rounded: f64 = text.parse().unwrap_or(scaled);
        if rounded.abs() >= 1000.0 && exp3 < max_exp {
            exp3 += 1;
            continue;
        }
        return format!("{}{}", text, PREFIXES[(exp3 + UNIT_INDEX) as usize]);
    }
}

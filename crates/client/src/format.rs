//! Display formatting for listing rows.

/// Format a price as en-GB euros: `€1,234.50`, `-€5.00`.
///
/// Non-finite input renders as `€NaN`.
pub fn format_price(value: f64) -> String {
    if !value.is_finite() {
        return "€NaN".to_string();
    }

    let cents = (value.abs() * 100.0).round() as u128;
    let (units, fraction) = (cents / 100, cents % 100);
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };

    format!("{sign}€{}.{fraction:02}", group_thousands(units))
}

fn group_thousands(n: u128) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

//! Display formatting for dashboard values.

/// Placeholder shown wherever a metric could not be computed.
pub const UNAVAILABLE: &str = "unavailable";

/// Price in Australian dollars, two decimal places.
pub fn currency(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("${:.2}", v),
        None => UNAVAILABLE.to_string(),
    }
}

/// Percent with two decimal places, sign carried by the value.
pub fn percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}%", v),
        None => UNAVAILABLE.to_string(),
    }
}

/// Share volume with thousands separators.
pub fn volume(value: Option<u64>) -> String {
    match value {
        Some(v) => group_thousands(v),
        None => UNAVAILABLE.to_string(),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

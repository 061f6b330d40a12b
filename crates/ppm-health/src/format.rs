//! Narrative number formatting

/// Whole currency amount with thousands separators, e.g. `$2,520,000`
///
/// Negative amounts keep the sign after the symbol: `$-25,000`.
#[must_use]
pub fn currency(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("$-{grouped}")
    } else {
        format!("${grouped}")
    }
}

use std::fmt;

/// Format an amount for reports and entry lines: the shortest decimal
/// representation that round-trips, with a guaranteed decimal point.
/// Example: 2000.0 -> "2000.0", 10.25 -> "10.25", -800.0 -> "-800.0"
pub fn format_amount(amount: f64) -> String {
    let formatted = amount.to_string();
    if formatted.contains('.') || !amount.is_finite() {
        formatted
    } else {
        format!("{formatted}.0")
    }
}

/// Parse user-typed amount text into a number.
/// Example: "2000" -> 2000.0, "12.5" -> 12.5, "-800" -> -800.0
///
/// Everything else is rejected here, before it can reach a ledger: the
/// entry sequences only ever hold finite amounts.
pub fn parse_amount(input: &str) -> Result<f64, ParseAmountError> {
    let amount: f64 = input
        .trim()
        .parse()
        .map_err(|_| ParseAmountError::InvalidFormat)?;
    if !amount.is_finite() {
        return Err(ParseAmountError::NotFinite);
    }
    Ok(amount)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    InvalidFormat,
    NotFinite,
}

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAmountError::InvalidFormat => write!(f, "invalid amount format"),
            ParseAmountError::NotFinite => write!(f, "amount must be a finite number"),
        }
    }
}

impl std::error::Error for ParseAmountError {}

//! Display formatting shared by every view.
//!
//! Digit grouping is always US style (`1,234.56`); only the currency sign
//! follows the configured currency code.

/// Currency sign for the amounts in a view, derived from an ISO 4217 code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    symbol: String,
}

impl CurrencyFormat {
    /// `USD` → `$`, `EUR` → `€`, `GBP` → `£`, `JPY` → `¥`. Any other code is
    /// used as a prefix followed by a space (`CHF 1,000.00`).
    pub fn for_code(code: &str) -> Self {
        let code = code.trim().to_ascii_uppercase();
        let symbol = match code.as_str() {
            "USD" => "$".to_string(),
            "EUR" => "€".to_string(),
            "GBP" => "£".to_string(),
            "JPY" => "¥".to_string(),
            _ => format!("{code} "),
        };
        Self { symbol }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Sign, grouping and two decimals: `2800.0` → `"$2,800.00"`,
    /// `-100.0` → `"-$100.00"`.
    pub fn amount(&self, value: f64) -> String {
        let cents = (value.abs() * 100.0).round() as u128;
        let whole = group_thousands(&(cents / 100).to_string());
        let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
        format!("{sign}{}{whole}.{:02}", self.symbol, cents % 100)
    }

    /// Like [`format_grouped`] with the currency sign: `45000.0` → `"$45,000"`.
    pub fn grouped(&self, value: f64) -> String {
        let grouped = format_grouped(value);
        match grouped.strip_prefix('-') {
            Some(rest) => format!("-{}{rest}", self.symbol),
            None => format!("{}{grouped}", self.symbol),
        }
    }

    /// Gain/loss cell text: `"$2,550.00 (17.00%)"`.
    pub fn gain_loss(&self, gain_loss: f64, gain_loss_percent: f64) -> String {
        format!(
            "{} ({})",
            self.amount(gain_loss),
            format_percent(gain_loss_percent)
        )
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::for_code("USD")
    }
}

/// Format with thousands separators and at most three decimals, trailing
/// zeros dropped: `45000.0` → `"45,000"`, `1234.5` → `"1,234.5"`.
pub fn format_grouped(value: f64) -> String {
    let millis = (value.abs() * 1000.0).round() as u128;
    let whole = group_thousands(&(millis / 1000).to_string());
    let frac = format!("{:03}", millis % 1000);
    let frac = frac.trim_end_matches('0');
    let sign = if value < 0.0 && millis > 0 { "-" } else { "" };
    if frac.is_empty() {
        format!("{sign}{whole}")
    } else {
        format!("{sign}{whole}.{frac}")
    }
}

/// Percentage with exactly two decimals and a `%` sign: `17.0` → `"17.00%"`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

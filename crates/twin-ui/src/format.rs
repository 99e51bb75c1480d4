//! Locale-aware price display.
//!
//! Only the conventions the front-end needs: decimal separator, digit
//! grouping and where the currency symbol goes.

use twin_core::money::Money;

/// Where the currency symbol sits relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    /// `€7.50`
    Prefix,
    /// `7,50 €`
    Suffix,
}

/// How to render [`Money`] for one locale and currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceFormat {
    symbol: String,
    position: SymbolPosition,
    decimal: char,
    group: char,
}

/// Locales written `1 234,50 €`.
const SUFFIX_LANGUAGES: &[&str] = &["fr", "de", "es", "it", "pt", "nl"];

impl PriceFormat {
    /// Picks separators and symbol placement from a BCP 47 locale tag
    /// (`fr-FR`, `en_GB`, ...) and an ISO currency code.
    pub fn for_locale(locale: &str, currency: &str) -> Self {
        let language = locale
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        let symbol = currency_symbol(currency);

        if SUFFIX_LANGUAGES.contains(&language.as_str()) {
            Self {
                symbol,
                position: SymbolPosition::Suffix,
                decimal: ',',
                group: ' ',
            }
        } else {
            Self {
                symbol,
                position: SymbolPosition::Prefix,
                decimal: '.',
                group: ',',
            }
        }
    }

    pub fn position(&self) -> SymbolPosition {
        self.position
    }

    /// Formats an amount, e.g. `7,50 €` or `€7.50`.
    pub fn format(&self, amount: Money) -> String {
        let number = format!(
            "{}{}{:02}",
            group_digits(amount.units(), self.group),
            self.decimal,
            amount.fraction()
        );
        match self.position {
            SymbolPosition::Suffix => format!("{} {}", number, self.symbol),
            SymbolPosition::Prefix if self.symbol.chars().count() > 1 => {
                format!("{} {}", self.symbol, number)
            }
            SymbolPosition::Prefix => format!("{}{}", self.symbol, number),
        }
    }
}

impl Default for PriceFormat {
    fn default() -> Self {
        Self::for_locale("fr-FR", "EUR")
    }
}

fn currency_symbol(code: &str) -> String {
    match code.to_ascii_uppercase().as_str() {
        "EUR" => "€".to_string(),
        "USD" => "$".to_string(),
        "GBP" => "£".to_string(),
        "CHF" => "CHF".to_string(),
        other => other.to_string(),
    }
}

fn group_digits(units: u64, separator: char) -> String {
    let digits = units.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

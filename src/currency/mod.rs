//! Currency rendering for calculated amounts.

use serde::{Deserialize, Serialize};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("CAD")
    }
}

/// Separators used when rendering numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl LocaleConfig {
    /// Resolves a language tag to its separators; unknown tags fall back to English.
    pub fn for_tag(tag: &str) -> Self {
        let (decimal_separator, grouping_separator) = match tag {
            "fr-CA" | "fr-FR" => (',', ' '),
            "de-DE" => (',', '.'),
            _ => ('.', ','),
        };
        Self {
            language_tag: tag.to_string(),
            decimal_separator,
            grouping_separator,
        }
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self::for_tag("en-CA")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct FormatOptions {
    pub currency_display: CurrencyDisplay,
    pub negative_style: NegativeStyle,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum NegativeStyle {
    #[default]
    Sign,
    Parentheses,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CurrencyDisplay {
    #[default]
    Symbol,
    Code,
}

/// Formats currency amounts for presentation.
pub trait CurrencyFormatter: Send + Sync {
    fn format_amount(&self, amount: f64) -> String;
}

/// Locale-aware formatter producing `$1,234.50`-style strings.
#[derive(Debug, Clone, Default)]
pub struct LocaleCurrencyFormatter {
    pub code: CurrencyCode,
    pub locale: LocaleConfig,
    pub options: FormatOptions,
}

impl LocaleCurrencyFormatter {
    pub fn new(code: CurrencyCode, locale: LocaleConfig) -> Self {
        Self {
            code,
            locale,
            options: FormatOptions::default(),
        }
    }

    pub fn with_options(mut self, options: FormatOptions) -> Self {
        self.options = options;
        self
    }
}

impl CurrencyFormatter for LocaleCurrencyFormatter {
    fn format_amount(&self, amount: f64) -> String {
        format_currency_value(amount, &self.code, &self.locale, &self.options)
    }
}

pub fn symbol_for(code: &str) -> &str {
    match code {
        "CAD" | "USD" => "$",
        "AUD" => "A$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        _ => code,
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    format_minor_units(locale, to_minor_units(value, precision), precision)
}

/// Scales `value` by `10^precision` and rounds halves toward positive infinity.
///
/// The shift is applied to the shortest decimal form of `value`, so `1.005`
/// scales to exactly `100.5` instead of the binary product `100.49999...`.
pub fn to_minor_units(value: f64, precision: u8) -> i128 {
    let shifted = format!("{value}e{precision}")
        .parse::<f64>()
        .unwrap_or_else(|_| value * 10f64.powi(i32::from(precision)));
    (shifted + 0.5).floor() as i128
}

fn format_minor_units(locale: &LocaleConfig, units: i128, precision: u8) -> String {
    let precision = usize::from(precision);
    let digits = format!("{:0>width$}", units.unsigned_abs(), width = precision + 1);
    let (int_part, frac_part) = digits.split_at(digits.len() - precision);
    let sign = if units < 0 { "-" } else { "" };
    let mut out = format!("{}{}", sign, group_digits(int_part, locale.grouping_separator));
    if precision > 0 {
        out.push(locale.decimal_separator);
        out.push_str(frac_part);
    }
    out
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx != 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

pub fn format_currency_value(
    amount: f64,
    code: &CurrencyCode,
    locale: &LocaleConfig,
    options: &FormatOptions,
) -> String {
    let precision = minor_units_for(code.as_str());
    let units = to_minor_units(amount, precision);
    let negative = units < 0;
    let body = format_minor_units(locale, units.abs(), precision);
    let unsigned = match options.currency_display {
        CurrencyDisplay::Symbol => format!("{}{}", symbol_for(code.as_str()), body),
        CurrencyDisplay::Code => format!("{} {}", code.as_str(), body),
    };
    if !negative {
        return unsigned;
    }
    match options.negative_style {
        NegativeStyle::Sign => format!("-{unsigned}"),
        NegativeStyle::Parentheses => format!("({unsigned})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cad() -> LocaleCurrencyFormatter {
        LocaleCurrencyFormatter::default()
    }

    #[test]
    fn formats_like_numeral_currency_pattern() {
        let formatter = cad();
        assert_eq!(formatter.format_amount(0.0), "$0.00");
        assert_eq!(formatter.format_amount(60.0), "$60.00");
        assert_eq!(formatter.format_amount(1234.5), "$1,234.50");
        assert_eq!(formatter.format_amount(1_234_567.891), "$1,234,567.89");
    }

    #[test]
    fn negatives_put_sign_before_symbol() {
        assert_eq!(cad().format_amount(-42.0), "-$42.00");
        assert_eq!(cad().format_amount(-0.001), "$0.00");
    }

    #[test]
    fn parentheses_and_code_display() {
        let formatter = LocaleCurrencyFormatter::new(
            CurrencyCode::new("eur"),
            LocaleConfig::for_tag("fr-CA"),
        )
        .with_options(FormatOptions {
            currency_display: CurrencyDisplay::Code,
            negative_style: NegativeStyle::Parentheses,
        });
        assert_eq!(formatter.format_amount(-1234.5), "(EUR 1 234,50)");
    }

    #[test]
    fn zero_minor_unit_currencies_drop_decimals() {
        let formatter = LocaleCurrencyFormatter::new(CurrencyCode::new("JPY"), LocaleConfig::default());
        assert_eq!(formatter.format_amount(123456.0), "¥123,456");
    }
}

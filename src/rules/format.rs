//! Currency and date formatting for display.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const DUE_DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Locale-aware formatting preferences. The default targets pt-BR/BRL, the
/// locale the bills service was written for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub currency_symbol: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "pt-BR".into(),
            currency_symbol: "R$".into(),
            decimal_separator: ',',
            grouping_separator: '.',
        }
    }
}

impl LocaleConfig {
    /// Builds a locale from a language tag and an ISO 4217 currency code.
    /// Unknown tags keep pt-BR separators; unknown codes render as themselves.
    pub fn from_tags(language_tag: &str, currency_code: &str) -> Self {
        let (decimal_separator, grouping_separator) = match language_tag {
            "en-US" | "en-GB" => ('.', ','),
            _ => (',', '.'),
        };
        Self {
            language_tag: language_tag.into(),
            currency_symbol: symbol_for(currency_code),
            decimal_separator,
            grouping_separator,
        }
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "BRL" => "R$".into(),
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        _ => code.into(),
    }
}

/// Renders a monetary amount with two fractional digits, locale grouping, and
/// the symbol ahead of the value, e.g. `1234.5` → `"R$ 1.234,50"`.
///
/// Total over its input: no value is rejected. Negative amounts carry a
/// leading sign, matching `Intl.NumberFormat` output for pt-BR.
pub fn format_currency(locale: &LocaleConfig, amount: f64) -> String {
    let body = format_number(locale, amount.abs(), 2);
    if amount < 0.0 {
        format!("-{} {}", locale.currency_symbol, body)
    } else {
        format!("{} {}", locale.currency_symbol, body)
    }
}

/// Renders a calendar date as `DD/MM/YYYY`.
///
/// `NaiveDate` carries no timezone, so the rendering cannot shift by the
/// host's UTC offset.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Parses a bare `YYYY-MM-DD` string into a calendar date. The result has no
/// time component, which anchors later comparisons at day granularity.
pub fn parse_due_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DUE_DATE_INPUT_FORMAT).ok()
}

fn format_number(locale: &LocaleConfig, value: f64, precision: usize) -> String {
    let raw = format!("{:.*}", precision, value);
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (raw.as_str(), None),
    };
    let grouped = group_digits(int_part, locale.grouping_separator);
    match frac_part {
        Some(frac) => format!("{}{}{}", grouped, locale.decimal_separator, frac),
        None => grouped,
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}

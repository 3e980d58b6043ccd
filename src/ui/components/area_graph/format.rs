//! Value formatting for the tooltip
//!
//! Uses fixed-capacity heapless strings so formatting never allocates while
//! drawing.

use core::fmt::{self, Write};

use heapless::String;
use serde::{Deserialize, Serialize};

use super::constants::{MAX_FRACTION_DIGITS, MAX_VALUE_LABEL_LENGTH};
use super::{GraphError, GraphResult};

/// Formatted value label
pub type ValueLabel = String<MAX_VALUE_LABEL_LENGTH>;

/// Locales with currency presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    /// Spanish (Mexico)
    #[serde(rename = "es-MX")]
    EsMx,
    /// English (United States)
    #[serde(rename = "en-US")]
    EnUs,
}

impl Locale {
    /// Parse a BCP 47 tag such as `"es-MX"`
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "es-MX" => Some(Self::EsMx),
            "en-US" => Some(Self::EnUs),
            _ => None,
        }
    }

    /// The BCP 47 tag of this locale
    pub fn tag(&self) -> &'static str {
        match self {
            Self::EsMx => "es-MX",
            Self::EnUs => "en-US",
        }
    }
}

/// Currencies with presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    /// Mexican peso
    #[serde(rename = "MXN")]
    Mxn,
    /// US dollar
    #[serde(rename = "USD")]
    Usd,
}

impl Currency {
    /// Parse an ISO 4217 code such as `"MXN"`
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "MXN" => Some(Self::Mxn),
            "USD" => Some(Self::Usd),
            _ => None,
        }
    }

    /// The ISO 4217 code of this currency
    pub fn code(&self) -> &'static str {
        match self {
            Self::Mxn => "MXN",
            Self::Usd => "USD",
        }
    }
}

/// Where the currency symbol goes relative to the amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPlacement {
    /// Symbol directly before the amount (`$20.00`)
    Prefix,
    /// Symbol before the amount, separated by a space (`USD 20.00`)
    PrefixSpaced,
}

/// Rules for rendering an amount of money
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormat {
    /// Currency symbol or code
    pub symbol: &'static str,
    /// Symbol placement
    pub placement: SymbolPlacement,
    /// Thousands separator
    pub grouping: char,
    /// Decimal separator
    pub decimal: char,
    /// Digits after the decimal separator
    pub fraction_digits: u8,
}

impl CurrencyFormat {
    /// Create a custom currency format
    ///
    /// `fraction_digits` is capped at [`MAX_FRACTION_DIGITS`].
    pub const fn new(
        symbol: &'static str,
        placement: SymbolPlacement,
        grouping: char,
        decimal: char,
        fraction_digits: u8,
    ) -> Self {
        let fraction_digits = if fraction_digits > MAX_FRACTION_DIGITS {
            MAX_FRACTION_DIGITS
        } else {
            fraction_digits
        };
        Self {
            symbol,
            placement,
            grouping,
            decimal,
            fraction_digits,
        }
    }

    /// Preset for a locale and currency pair
    ///
    /// The symbol follows how the locale displays the currency: a bare `$`
    /// for the local currency, a disambiguated symbol or code otherwise.
    pub const fn preset(locale: Locale, currency: Currency) -> Self {
        let (symbol, placement) = match (locale, currency) {
            (Locale::EsMx, Currency::Mxn) => ("$", SymbolPlacement::Prefix),
            (Locale::EsMx, Currency::Usd) => ("USD", SymbolPlacement::PrefixSpaced),
            (Locale::EnUs, Currency::Usd) => ("$", SymbolPlacement::Prefix),
            (Locale::EnUs, Currency::Mxn) => ("MX$", SymbolPlacement::Prefix),
        };
        Self::new(symbol, placement, ',', '.', 2)
    }

    /// Format `value` as money, rounding half up on the last fraction digit
    ///
    /// Amounts too large for the label switch to scientific notation after
    /// the symbol (`$1.00e20`).
    pub fn format(&self, value: f64) -> ValueLabel {
        let digits = self.fraction_digits.min(MAX_FRACTION_DIGITS);
        let negative = value < 0.0;
        let magnitude = if negative { -value } else { value };
        let scale = 10u64.pow(digits as u32);
        let scaled = magnitude * scale as f64 + 0.5;

        // `u64::MAX as f64` is 2^64, so anything below it converts without saturating
        if scaled < u64::MAX as f64 {
            let mut s = ValueLabel::new();
            if self.write_fixed(&mut s, negative, scaled as u64, scale, digits).is_ok() {
                return s;
            }
        }

        let mut s = ValueLabel::new();
        if self.write_scientific(&mut s, negative, magnitude, digits).is_ok() {
            return s;
        }

        // Symbol too long to share the label; `{:e}` of any f64 fits in 24
        s.clear();
        let _ = write!(s, "{:e}", value);
        s
    }

    fn write_fixed(
        &self,
        s: &mut ValueLabel,
        negative: bool,
        units: u64,
        scale: u64,
        digits: u8,
    ) -> fmt::Result {
        let whole = units / scale;
        let fraction = units % scale;

        if negative && units != 0 {
            s.write_char('-')?;
        }
        self.write_symbol(s)?;

        let mut whole_digits: String<20> = String::new();
        write!(whole_digits, "{}", whole)?;
        let len = whole_digits.len();
        for (i, ch) in whole_digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                s.write_char(self.grouping)?;
            }
            s.write_char(ch)?;
        }

        if digits > 0 {
            s.write_char(self.decimal)?;
            write!(s, "{:0width$}", fraction, width = digits as usize)?;
        }
        Ok(())
    }

    fn write_scientific(
        &self,
        s: &mut ValueLabel,
        negative: bool,
        magnitude: f64,
        digits: u8,
    ) -> fmt::Result {
        if negative {
            s.write_char('-')?;
        }
        self.write_symbol(s)?;
        write!(s, "{:.*e}", digits as usize, magnitude)
    }

    fn write_symbol(&self, s: &mut ValueLabel) -> fmt::Result {
        s.write_str(self.symbol)?;
        if self.placement == SymbolPlacement::PrefixSpaced {
            s.write_char(' ')?;
        }
        Ok(())
    }
}

/// Serializable choice of value format, used by configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueFormat {
    /// Plain number
    Raw,
    /// Money in a locale
    Currency {
        /// Display locale
        locale: Locale,
        /// Currency being displayed
        currency: Currency,
    },
}

impl Default for ValueFormat {
    fn default() -> Self {
        Self::Currency {
            locale: Locale::EsMx,
            currency: Currency::Mxn,
        }
    }
}

/// Turns a data value into tooltip text
#[derive(Debug, Clone, Copy)]
pub enum ValueFormatter {
    /// Shortest decimal representation (`20`, `20.5`), scientific notation
    /// (`1e25`) when that doesn't fit the label
    Raw,
    /// Money with grouping and fixed fraction digits
    Currency(CurrencyFormat),
    /// Custom formatter using function pointer
    Custom(fn(f64) -> ValueLabel),
}

impl ValueFormatter {
    /// Currency formatter for a locale tag and currency code
    ///
    /// ```ignore
    /// let formatter = ValueFormatter::currency("es-MX", "MXN")?;
    /// assert_eq!(formatter.format(1234.5), "$1,234.50");
    /// ```
    pub fn currency(locale: &str, code: &str) -> GraphResult<Self> {
        let locale = Locale::from_tag(locale).ok_or(GraphError::UnsupportedCurrency)?;
        let currency = Currency::from_code(code).ok_or(GraphError::UnsupportedCurrency)?;
        Ok(Self::Currency(CurrencyFormat::preset(locale, currency)))
    }

    /// Format a value
    pub fn format(&self, value: f64) -> ValueLabel {
        match self {
            Self::Raw => {
                let mut s = String::new();
                if write!(s, "{}", value).is_err() {
                    s.clear();
                    let _ = write!(s, "{:e}", value);
                }
                s
            }
            Self::Currency(format) => format.format(value),
            Self::Custom(func) => func(value),
        }
    }
}

impl Default for ValueFormatter {
    fn default() -> Self {
        ValueFormat::default().into()
    }
}

impl From<ValueFormat> for ValueFormatter {
    fn from(format: ValueFormat) -> Self {
        match format {
            ValueFormat::Raw => Self::Raw,
            ValueFormat::Currency { locale, currency } => {
                Self::Currency(CurrencyFormat::preset(locale, currency))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mxn() -> ValueFormatter {
        ValueFormatter::currency("es-MX", "MXN").unwrap()
    }

    #[test]
    fn raw_uses_shortest_representation() {
        assert_eq!(ValueFormatter::Raw.format(20.0), "20");
        assert_eq!(ValueFormatter::Raw.format(20.5), "20.5");
        assert_eq!(ValueFormatter::Raw.format(-3.25), "-3.25");
    }

    #[test]
    fn currency_groups_thousands_and_pads_cents() {
        assert_eq!(mxn().format(20.0), "$20.00");
        assert_eq!(mxn().format(1234.5), "$1,234.50");
        assert_eq!(mxn().format(999.999), "$1,000.00");
        assert_eq!(mxn().format(0.0), "$0.00");
        assert_eq!(mxn().format(100.0), "$100.00");
    }

    #[test]
    fn currency_negative_amounts() {
        assert_eq!(mxn().format(-1234567.891), "-$1,234,567.89");
        // Rounds to zero, so no sign
        assert_eq!(mxn().format(-0.001), "$0.00");
    }

    #[test]
    fn foreign_currency_symbols() {
        let usd_in_mexico = ValueFormatter::currency("es-MX", "USD").unwrap();
        assert_eq!(usd_in_mexico.format(20.0), "USD 20.00");

        let mxn_in_us = ValueFormatter::currency("en-US", "MXN").unwrap();
        assert_eq!(mxn_in_us.format(1500.0), "MX$1,500.00");

        let usd = ValueFormatter::currency("en-US", "USD").unwrap();
        assert_eq!(usd.format(7.1), "$7.10");
    }

    #[test]
    fn unknown_pairs_are_rejected() {
        assert_eq!(
            ValueFormatter::currency("fr-FR", "EUR").unwrap_err(),
            GraphError::UnsupportedCurrency
        );
        assert_eq!(
            ValueFormatter::currency("es-MX", "EUR").unwrap_err(),
            GraphError::UnsupportedCurrency
        );
    }

    #[test]
    fn custom_format_without_fraction() {
        let format = CurrencyFormat::new("kr", SymbolPlacement::PrefixSpaced, '.', ',', 0);
        assert_eq!(format.format(1234567.4), "kr 1.234.567");
    }

    #[test]
    fn custom_function_formatter() {
        fn percent(value: f64) -> ValueLabel {
            let mut s = String::new();
            let _ = write!(s, "{:.0}%", value * 100.0);
            s
        }

        assert_eq!(ValueFormatter::Custom(percent).format(0.42), "42%");
    }

    #[test]
    fn default_is_mexican_pesos() {
        assert_eq!(ValueFormatter::default().format(15.0), "$15.00");
        assert_eq!(ValueFormatter::from(ValueFormat::Raw).format(15.0), "15");
        assert_eq!(Locale::EsMx.tag(), "es-MX");
        assert_eq!(Currency::Usd.code(), "USD");
    }

    #[test]
    fn raw_falls_back_to_scientific_when_too_long() {
        assert_eq!(ValueFormatter::Raw.format(1e20), "100000000000000000000");
        assert_eq!(ValueFormatter::Raw.format(1e25), "1e25");
        assert_eq!(ValueFormatter::Raw.format(-f64::MAX), "-1.7976931348623157e308");

        let tiny = ValueFormatter::Raw.format(1.0 / 3.0 * 1e-7);
        assert!(tiny.starts_with("3.333333"));
        assert!(tiny.ends_with("e-8"));
    }

    #[test]
    fn huge_amounts_keep_their_magnitude() {
        assert_eq!(mxn().format(1e14), "$100,000,000,000,000.00");
        assert_eq!(mxn().format(1e17), "$1.00e17");
        assert_eq!(mxn().format(1e20), "$1.00e20");
        assert_eq!(mxn().format(-1e20), "-$1.00e20");
        assert_eq!(mxn().format(f64::MAX), "$1.80e308");
        assert_eq!(mxn().format(1e-300), "$0.00");
    }

    #[test]
    fn fraction_digits_are_capped() {
        let format = CurrencyFormat::new("$", SymbolPlacement::Prefix, ',', '.', 20);
        assert_eq!(format.fraction_digits, MAX_FRACTION_DIGITS);
        assert_eq!(format.format(1.0), "$1.000000000");

        // Fields are public, so `format` caps them too
        let wide = CurrencyFormat {
            fraction_digits: u8::MAX,
            ..CurrencyFormat::preset(Locale::EsMx, Currency::Mxn)
        };
        assert_eq!(wide.format(1.5), "$1.500000000");
    }

    #[test]
    fn long_symbols_fall_back_to_plain_scientific() {
        let format = CurrencyFormat::new(
            "a very long currency name",
            SymbolPlacement::PrefixSpaced,
            ',',
            '.',
            2,
        );
        assert_eq!(format.format(1e30), "1e30");
    }
}

//! Numeric locale
//!
//! The separators a caller's locale uses when rendering decimal numbers.

use std::str::FromStr;

/// Narrow no-break space, used for digit grouping in French
const NARROW_NBSP: char = '\u{202f}';

/// Decimal and grouping separators for number display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLocale {
    pub decimal_separator: char,
    pub group_separator: Option<char>,
}

impl NumberLocale {
    /// English (US/UK): `1,234.5`
    pub const EN_US: Self = Self {
        decimal_separator: '.',
        group_separator: Some(','),
    };

    /// German and most continental locales: `1.234,5`
    pub const DE_DE: Self = Self {
        decimal_separator: ',',
        group_separator: Some('.'),
    };

    /// French: `1 234,5` (narrow no-break space)
    pub const FR_FR: Self = Self {
        decimal_separator: ',',
        group_separator: Some(NARROW_NBSP),
    };

    /// Locale-neutral: `1234.5`
    pub const PLAIN: Self = Self {
        decimal_separator: '.',
        group_separator: None,
    };

    /// Resolve a BCP 47 tag or POSIX locale name (`de-DE`, `fr_FR.UTF-8`)
    ///
    /// Unrecognized languages fall back to English.
    pub fn from_tag(tag: &str) -> Self {
        let lower = tag.trim().to_lowercase();
        let language = lower
            .split(['-', '_', '.', '@'])
            .next()
            .unwrap_or_default();

        match language {
            "c" | "posix" => Self::PLAIN,
            "fr" => Self::FR_FR,
            "de" | "es" | "it" | "nl" | "pt" | "da" | "id" | "tr" => Self::DE_DE,
            _ => Self::EN_US,
        }
    }

    /// Locale of the current process, taken from `LC_ALL`, `LC_NUMERIC` or `LANG`
    pub fn from_env() -> Self {
        ["LC_ALL", "LC_NUMERIC", "LANG"]
            .iter()
            .filter_map(|key| std::env::var(key).ok())
            .find(|value| !value.is_empty())
            .map(|value| Self::from_tag(&value))
            .unwrap_or_default()
    }

    /// Render a number with a bounded count of fractional digits
    ///
    /// Rounds to `max_fraction` digits, drops trailing zeros, then pads back
    /// to `min_fraction`. Non-finite values render as `NaN`, `∞` or `-∞`.
    pub fn format_decimal(&self, value: f64, min_fraction: usize, max_fraction: usize) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 { "∞" } else { "-∞" }.to_string();
        }

        let fixed = format!("{:.*}", max_fraction, value);
        let (negative, digits) = match fixed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, fixed.as_str()),
        };
        let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));

        let mut fraction = frac_part.trim_end_matches('0').to_string();
        while fraction.len() < min_fraction {
            fraction.push('0');
        }

        let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
        if negative {
            out.push('-');
        }
        match self.group_separator {
            Some(sep) => out.push_str(&group_digits(int_part, sep)),
            None => out.push_str(int_part),
        }
        if !fraction.is_empty() {
            out.push(self.decimal_separator);
            out.push_str(&fraction);
        }
        out
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::EN_US
    }
}

impl FromStr for NumberLocale {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_tag(s))
    }
}

/// Insert a separator every three digits from the right
fn group_digits(int_part: &str, separator: char) -> String {
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

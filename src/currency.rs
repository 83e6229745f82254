//! Currency codes, display symbols, and amount formatting.
//!
//! The symbol table and placement rules are fixed; there is no locale
//! negotiation. Unknown codes are carried verbatim so they can be stored and
//! echoed back, but render with the dollar sign in the spaced layout.

use std::fmt;

use crate::number::{format_fixed2, parse_float};

#[cfg(test)]
#[path = "currency_test.rs"]
mod currency_test;

/// A currency preference: one of the supported codes, or an unrecognized code kept as-is.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Inr,
    Gbp,
    Jpy,
    Cad,
    /// Any other code. Matching is case-sensitive, so `"usd"` lands here.
    Other(String),
}

/// Where the symbol sits relative to the formatted number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymbolPlacement {
    /// `$1,234.50`
    Prefix,
    /// `₹ 1,234.50`
    SpacedPrefix,
    /// `1,234.50 €`
    SpacedSuffix,
}

impl Currency {
    /// All supported codes, in selector order.
    pub const SUPPORTED: [Currency; 6] =
        [Currency::Usd, Currency::Eur, Currency::Inr, Currency::Gbp, Currency::Jpy, Currency::Cad];

    /// Resolve a stored or user-supplied code.
    pub fn from_code(code: &str) -> Self {
        match code {
            "USD" => Self::Usd,
            "EUR" => Self::Eur,
            "INR" => Self::Inr,
            "GBP" => Self::Gbp,
            "JPY" => Self::Jpy,
            "CAD" => Self::Cad,
            other => Self::Other(other.to_owned()),
        }
    }

    /// The code as persisted.
    pub fn code(&self) -> &str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Inr => "INR",
            Self::Gbp => "GBP",
            Self::Jpy => "JPY",
            Self::Cad => "CAD",
            Self::Other(code) => code,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Usd | Self::Other(_) => "$",
            Self::Eur => "€",
            Self::Inr => "₹",
            Self::Gbp => "£",
            Self::Jpy => "¥",
            Self::Cad => "C$",
        }
    }

    pub fn placement(&self) -> SymbolPlacement {
        match self {
            Self::Usd | Self::Cad | Self::Gbp => SymbolPlacement::Prefix,
            Self::Eur => SymbolPlacement::SpacedSuffix,
            Self::Inr | Self::Jpy | Self::Other(_) => SymbolPlacement::SpacedPrefix,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Format a numeric amount in this currency.
    pub fn format(&self, amount: f64) -> String {
        let number = format_fixed2(amount);
        let symbol = self.symbol();
        match self.placement() {
            SymbolPlacement::Prefix => format!("{symbol}{number}"),
            SymbolPlacement::SpacedPrefix => format!("{symbol} {number}"),
            SymbolPlacement::SpacedSuffix => format!("{number} {symbol}"),
        }
    }

    /// Parse `raw` leniently (see [`parse_float`]) and format it in this currency.
    pub fn format_text(&self, raw: &str) -> String {
        self.format(parse_float(raw))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        Self::from_code(code)
    }
}

/// Display symbol for `code`; unknown codes map to `$`.
pub fn currency_symbol(code: &str) -> &'static str {
    Currency::from_code(code).symbol()
}

/// Format `amount` in the currency named by `code`.
pub fn format_amount(amount: f64, code: &str) -> String {
    Currency::from_code(code).format(amount)
}

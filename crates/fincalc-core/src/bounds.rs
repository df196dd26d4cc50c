//! Numeric input policy shared by every calculator surface.
//!
//! Free-text entry follows a two-phase rule: while a field is being edited,
//! unparsable text is deferred (the previous committed value stays in
//! effect), and on commit the parsed value is clamped into the field's
//! declared range. Engines therefore only ever see committed numbers.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Inclusive [min, max] range for one numeric input field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputBounds {
    pub min: Decimal,
    pub max: Decimal,
}

impl InputBounds {
    pub const fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    /// Clamp a committed value into the range. A degenerate range with
    /// min == max pins every input to that single value.
    pub fn clamp(&self, value: Decimal) -> Decimal {
        value.max(self.min).min(self.max)
    }

    /// Parse-then-clamp for committed free-text entry. Unparsable text
    /// yields None and the caller keeps its previous value.
    pub fn commit(&self, raw: &str) -> Option<Decimal> {
        parse_entry(raw).map(|v| self.clamp(v))
    }

    pub fn contains(&self, value: Decimal) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Parse a free-text numeric entry. Surrounding whitespace is tolerated;
/// anything else unparsable defers (None).
pub fn parse_entry(raw: &str) -> Option<Decimal> {
    raw.trim().parse::<Decimal>().ok()
}

// ---------------------------------------------------------------------------
// Declared ranges
// ---------------------------------------------------------------------------

pub const LOAN_AMOUNT_BOUNDS: InputBounds = InputBounds::new(dec!(100_000), dec!(10_000_000));
pub const LOAN_RATE_BOUNDS: InputBounds = InputBounds::new(dec!(5), dec!(20));
pub const LOAN_TENURE_BOUNDS: InputBounds = InputBounds::new(dec!(1), dec!(30));

pub const SIP_AMOUNT_BOUNDS: InputBounds = InputBounds::new(dec!(500), dec!(100_000));
pub const SIP_RATE_BOUNDS: InputBounds = InputBounds::new(dec!(1), dec!(30));
pub const SIP_TENURE_BOUNDS: InputBounds = InputBounds::new(dec!(1), dec!(40));

pub const SIMPLE_PRINCIPAL_BOUNDS: InputBounds = InputBounds::new(dec!(1_000), dec!(10_000_000));
pub const SIMPLE_RATE_BOUNDS: InputBounds = InputBounds::new(dec!(1), dec!(30));
pub const SIMPLE_TIME_BOUNDS: InputBounds = InputBounds::new(dec!(1), dec!(30));

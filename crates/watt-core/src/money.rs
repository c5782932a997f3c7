//! # Money Module
//!
//! Provides the `Money` type for monetary values.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Energy draw is measured, so kWh stays a float:                         │
//! │    2.4 kWh × 0.30 × 30 = 21.599999999999998                             │
//! │                                                                         │
//! │  OUR SOLUTION: round ONCE into integer cents                            │
//! │    kWh × rate($) × days → 21.599999999999998 → 2160 cents → "$21.60"    │
//! │    Everything after that point is exact integer math                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use watt_core::money::Money;
//! use watt_core::types::UnitRate;
//!
//! let bill = Money::energy_cost(2.4, UnitRate::from_cents_per_kwh(25), 30);
//! assert_eq!(bill.cents(), 1800);
//! assert_eq!(bill.amount_string(), "18.00");
//! assert_eq!(bill.to_string(), "$18.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::types::UnitRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Where Money is Used
/// ```text
/// EnergyState ──► total_daily_load (kWh, f64)
///                      │
///                      ▼
///            Money::energy_cost(load, rate, 30)   ← float → cents, once
///                      │
///                      ▼
///            BillingSummary.monthly_bill ──► "$18.00" in the session
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Cost of drawing `kwh_per_day` for `days` days at `rate`.
    ///
    /// The product is taken in currency units, `kwh × rate × days` from left
    /// to right, then rounded to whole cents from the exact binary value of
    /// that float. A value exactly halfway between two cents rounds up, so
    /// 0.01 kWh on the standard plan stores 0.07499… and bills 7 cents.
    ///
    /// ## Example
    /// ```rust
    /// use watt_core::money::Money;
    /// use watt_core::types::UnitRate;
    ///
    /// let green = UnitRate::from_cents_per_kwh(30);
    /// assert_eq!(Money::energy_cost(2.4, green, 30).cents(), 2160);
    /// assert_eq!(Money::energy_cost(0.0, green, 30).cents(), 0);
    /// ```
    pub fn energy_cost(kwh_per_day: f64, rate: UnitRate, days: u32) -> Money {
        let amount = kwh_per_day * rate.per_kwh() * f64::from(days);
        Money(round_to_cents(amount))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// The amount with exactly two decimals and no currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use watt_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(3375).amount_string(), "33.75");
    /// assert_eq!(Money::from_cents(5).amount_string(), "0.05");
    /// assert_eq!(Money::from_cents(-550).amount_string(), "-5.50");
    /// ```
    pub fn amount_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money with a dollar sign. The session formats with the configured
/// currency symbol instead.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Rounds an amount in currency units to whole cents.
///
/// ```text
///   amount = mantissa × 2^exp          (exact, no decimal conversion)
///   cents  = ⌊amount × 100⌋ + (remainder ≥ ½ ? 1 : 0)
/// ```
/// The sign is applied after rounding the magnitude.
fn round_to_cents(amount: f64) -> i64 {
    let bits = amount.abs().to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);

    // Integral already (or not finite): scaling by 100 is exact or saturates
    if biased >= 1075 || biased == 0x7ff {
        return (amount * 100.0) as i64;
    }

    let (mantissa, shift) = if biased == 0 {
        (fraction, 1074u32)
    } else {
        (fraction | (1u64 << 52), (1075 - biased) as u32)
    };
    if shift >= 128 {
        return 0;
    }

    let scaled = u128::from(mantissa) * 100;
    let whole = scaled >> shift;
    let remainder = scaled - (whole << shift);
    let rounded = whole + u128::from(remainder >= 1u128 << (shift - 1));

    let cents = i64::try_from(rounded).unwrap_or(i64::MAX);
    if amount < 0.0 {
        -cents
    } else {
        cents
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1800)), "$18.00");
        assert_eq!(format!("{}", Money::from_cents(2625)), "$26.25");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_amount_string() {
        assert_eq!(Money::from_cents(1800).amount_string(), "18.00");
        assert_eq!(Money::from_cents(2160).amount_string(), "21.60");
        assert_eq!(Money::from_cents(0).amount_string(), "0.00");
    }

    #[test]
    fn test_energy_cost_rounds_float_noise() {
        let standard = UnitRate::from_cents_per_kwh(25);
        let green = UnitRate::from_cents_per_kwh(30);
        // 2.4 × 0.3 × 30 lands just below 21.6
        assert_eq!(Money::energy_cost(2.4, green, 30).cents(), 2160);
        assert_eq!(Money::energy_cost(2.4, standard, 30).cents(), 1800);
        assert_eq!(Money::energy_cost(4.5, standard, 30).cents(), 3375);
        assert_eq!(Money::energy_cost(3.5, standard, 30).cents(), 2625);
    }

    #[test]
    fn test_energy_cost_rounds_to_nearest_cent() {
        let standard = UnitRate::from_cents_per_kwh(25);
        // 0.001 kWh × 0.25 × 30 = 0.75 cents → 1 cent
        assert_eq!(Money::energy_cost(0.001, standard, 30).cents(), 1);
        // 0.0005 kWh × 0.25 × 30 = 0.375 cents → 0 cents
        assert_eq!(Money::energy_cost(0.0005, standard, 30).cents(), 0);
    }

    #[test]
    fn test_energy_cost_rounds_from_stored_value() {
        let standard = UnitRate::from_cents_per_kwh(25);
        // 0.01 × 0.25 × 30 is stored as 0.07499…, 0.03 × 0.25 × 30 as 0.22499…
        assert_eq!(Money::energy_cost(0.01, standard, 30).amount_string(), "0.07");
        assert_eq!(Money::energy_cost(0.03, standard, 30).amount_string(), "0.22");
    }

    #[test]
    fn test_round_to_cents() {
        // Exactly representable halves round up
        assert_eq!(round_to_cents(0.125), 13);
        assert_eq!(round_to_cents(0.375), 38);
        assert_eq!(round_to_cents(-0.125), -13);
        // The nearest double to 0.075 is below it
        assert_eq!(round_to_cents(0.075), 7);
        assert_eq!(round_to_cents(18.000000000000004), 1800);
        assert_eq!(round_to_cents(0.0), 0);
        assert_eq!(round_to_cents(1e-300), 0);
        assert_eq!(round_to_cents(f64::NAN), 0);
    }
}

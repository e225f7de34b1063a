// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Marketing Mix & ROAS Engine - Decimal Adapter

//! Adapter layer: converts between the engine's f64 world and Decimal money.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use tracing::warn;

use crate::money::Money;

/// Convert f64 to Decimal. Non-finite values become zero; finite values
/// beyond Decimal's range saturate at `Decimal::MAX` / `Decimal::MIN`.
pub fn to_decimal(v: f64) -> Decimal {
    if let Some(d) = Decimal::from_f64(v) {
        return d;
    }
    let fallback = if !v.is_finite() || v.abs() < 1.0 {
        Decimal::ZERO
    } else if v > 0.0 {
        Decimal::MAX
    } else {
        Decimal::MIN
    };
    warn!(value = v, %fallback, "amount not representable as decimal");
    fallback
}

/// Convert Decimal to f64.
pub fn from_decimal(d: Decimal) -> f64 {
    d.to_f64().unwrap_or(0.0)
}

/// Engine amount → display money.
pub fn to_money(v: f64) -> Money {
    Money::from_f64(v)
}

/// Round a ratio (ROAS, POAS) to two decimals for display.
pub fn round_ratio(v: f64) -> Decimal {
    to_decimal(v).round_dp(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn non_finite_maps_to_zero() {
        assert_eq!(to_decimal(f64::NAN), Decimal::ZERO);
        assert_eq!(to_decimal(f64::INFINITY), Decimal::ZERO);
    }

    #[test]
    fn out_of_range_saturates() {
        assert_eq!(to_decimal(1e30), Decimal::MAX);
        assert_eq!(to_decimal(-1e30), Decimal::MIN);
        assert_eq!(to_money(f64::MAX).0, Decimal::MAX);
    }

    #[test]
    fn round_trip_plain_values() {
        assert_eq!(from_decimal(to_decimal(2.5)), 2.5);
        assert_eq!(round_ratio(2.857_142_857), dec!(2.86));
        assert_eq!(round_ratio(-0.5), dec!(-0.50));
    }
}

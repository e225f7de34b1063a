// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Marketing Mix & ROAS Engine - Scenario Sweeps

use tracing::debug;

use crate::break_even::{break_even_roas, poas_at_sales, profit_at_roas};
use crate::types::{PoasInputs, RoasInputs, ScenarioPoint, Series};

/// Integer ROAS targets plotted on the profit curve.
pub const ROAS_TARGETS: std::ops::RangeInclusive<u32> = 1..=20;
/// Gross margins (percent) plotted on the break-even curve.
pub const MARGIN_RANGE: std::ops::RangeInclusive<u32> = 5..=95;
/// Smallest exclusive upper bound of the POAS sales sweep.
const MIN_SALES_SWEEP_END: u32 = 5;

/// Evaluate `f` at each value, ordered by ascending input.
///
/// Ties keep the caller's order.
pub fn sweep<I, F>(values: I, f: F) -> Vec<ScenarioPoint>
where
    I: IntoIterator<Item = f64>,
    F: Fn(f64) -> f64,
{
    let mut points: Vec<ScenarioPoint> = values
        .into_iter()
        .map(|input| ScenarioPoint { input, value: f(input) })
        .collect();
    points.sort_by(|a, b| a.input.total_cmp(&b.input));
    points
}

/// Monthly profit at each integer ROAS target 1..=20.
pub fn profit_curve(inputs: &RoasInputs) -> Series {
    let points = sweep(ROAS_TARGETS.map(f64::from), |roas| {
        profit_at_roas(inputs.gross_margin, inputs.ad_spend, roas)
    });
    debug!(points = points.len(), gross_margin = inputs.gross_margin, "profit curve");

    Series {
        name: "Profit vs. ROAS".to_string(),
        x_label: "ROAS".to_string(),
        y_label: "Profit (kr.)".to_string(),
        reference_line: 0.0,
        points,
    }
}

/// Sales counts swept for a POAS curve: `1..max(5, N + 1)`.
pub fn sales_range(sales_count: u32) -> std::ops::Range<u32> {
    1..MIN_SALES_SWEEP_END.max(sales_count.saturating_add(1))
}

/// POAS at each sales count up to the scenario's own count.
pub fn poas_curve(inputs: &PoasInputs) -> Series {
    let points = sweep(sales_range(inputs.sales_count).map(f64::from), |sales| {
        poas_at_sales(inputs, sales as u32).poas
    });
    debug!(points = points.len(), sales_count = inputs.sales_count, "poas curve");

    Series {
        name: "POAS vs. Sales".to_string(),
        x_label: "Sales".to_string(),
        y_label: "POAS".to_string(),
        reference_line: 1.0,
        points,
    }
}

/// Break-even ROAS across gross margins 5..=95 percent.
pub fn break_even_curve() -> Series {
    Series {
        name: "Break-even ROAS vs. Gross margin".to_string(),
        x_label: "Gross margin (%)".to_string(),
        y_label: "Break-even ROAS".to_string(),
        reference_line: 1.0,
        points: sweep(MARGIN_RANGE.map(f64::from), break_even_roas),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_orders_by_input() {
        let points = sweep([3.0, 1.0, 2.0], |x| x * 10.0);
        let inputs: Vec<f64> = points.iter().map(|p| p.input).collect();
        assert_eq!(inputs, vec![1.0, 2.0, 3.0]);
        assert_eq!(points[0].value, 10.0);
    }

    #[test]
    fn profit_curve_covers_twenty_targets() {
        let series = profit_curve(&RoasInputs::default());
        assert_eq!(series.len(), 20);
        assert_eq!(series.points[0].input, 1.0);
        assert_eq!(series.points[19].input, 20.0);
        // ROAS 1 at 35% margin: 10000 * 0.35 - 10000
        assert!((series.points[0].value + 6500.0).abs() < 1e-6);
    }

    #[test]
    fn profit_curve_crosses_zero_after_break_even() {
        let series = profit_curve(&RoasInputs::default());
        // break-even ROAS is 2.857, so the first profitable integer target is 3
        assert_eq!(series.break_even_input(), Some(3.0));
    }

    #[test]
    fn sales_range_has_a_floor() {
        assert_eq!(sales_range(1), 1..5);
        assert_eq!(sales_range(4), 1..5);
        assert_eq!(sales_range(100), 1..101);
        assert_eq!(sales_range(u32::MAX), 1..u32::MAX);
    }

    #[test]
    fn poas_curve_ends_at_scenario_sales() {
        let inputs = PoasInputs::default();
        let series = poas_curve(&inputs);
        assert_eq!(series.len(), 100);
        let last = series.points.last().expect("test: non-empty curve");
        assert_eq!(last.input, 100.0);
        assert_eq!(last.value, -0.5);
    }

    #[test]
    fn poas_curve_is_zero_without_ad_spend() {
        let inputs = PoasInputs { ad_spend: 0.0, sales_count: 3, ..PoasInputs::default() };
        let series = poas_curve(&inputs);
        assert_eq!(series.len(), 4);
        assert!(series.values().all(|v| v == 0.0));
    }

    #[test]
    fn break_even_curve_spans_margins() {
        let series = break_even_curve();
        assert_eq!(series.len(), 91);
        assert!((series.points[0].value - 20.0).abs() < 1e-9);
    }
}

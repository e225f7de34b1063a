// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Marketing Mix & ROAS Engine - Break-even & Profit Model

//! Closed-form ROAS / POAS business model.
//!
//! Independent of channel traffic: these formulas answer "what does a given
//! ROAS target or sales volume mean for profit" at a fixed gross margin or
//! unit cost structure.

use crate::calculator::guarded_div;
use crate::types::{PoasInputs, PoasMetrics, RoasInputs, RoasMetrics};

/// ROAS at which profit is exactly zero: `1 / (margin / 100)`.
///
/// A zero margin has no break-even point and reports 0.
pub fn break_even_roas(gross_margin: f64) -> f64 {
    if gross_margin == 0.0 {
        return 0.0;
    }
    1.0 / (gross_margin / 100.0)
}

/// Profit after ad spend when ads return `roas_target` times their cost.
pub fn profit_at_roas(gross_margin: f64, ad_spend: f64, roas_target: f64) -> f64 {
    ad_spend * roas_target * (gross_margin / 100.0) - ad_spend
}

pub fn roas_metrics(inputs: &RoasInputs) -> RoasMetrics {
    let total_revenue = inputs.ad_spend * inputs.roas_target;
    RoasMetrics {
        break_even_roas: break_even_roas(inputs.gross_margin),
        total_revenue,
        monthly_profit: total_revenue * (inputs.gross_margin / 100.0) - inputs.ad_spend,
    }
}

/// Profit on ad spend for a given number of sales.
pub fn poas_at_sales(inputs: &PoasInputs, sales_count: u32) -> PoasMetrics {
    let sales = f64::from(sales_count);
    let total_revenue = sales * inputs.sale_price;
    let total_costs = (inputs.product_cost + inputs.variable_cost) * sales + inputs.ad_spend;
    let total_profit = total_revenue - total_costs;

    PoasMetrics {
        total_revenue,
        total_costs,
        total_profit,
        poas: guarded_div(total_profit, inputs.ad_spend),
    }
}

pub fn poas_metrics(inputs: &PoasInputs) -> PoasMetrics {
    poas_at_sales(inputs, inputs.sales_count)
}

/// Sales needed before POAS turns non-negative, if unit margin is positive.
pub fn break_even_sales(inputs: &PoasInputs) -> Option<u32> {
    let unit_margin = inputs.sale_price - inputs.product_cost - inputs.variable_cost;
    if unit_margin <= 0.0 {
        return None;
    }
    let needed = (inputs.ad_spend.max(0.0) / unit_margin).ceil();
    if needed > f64::from(u32::MAX) {
        return None;
    }
    Some(needed as u32)
}

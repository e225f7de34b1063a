// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Marketing Mix & ROAS Engine - Channel Metric Calculator

//! Per-channel traffic and revenue model.
//!
//! Clicks come from a formula selected by the channel's traffic kind; the
//! rest of the funnel is shared:
//!
//! ```text
//! conversions = clicks * cvr / 100
//! revenue     = conversions * aov
//! roas        = revenue / budget      (0 when budget is 0)
//! ```

use crate::types::{ChannelInput, ChannelResult, ChannelTraffic};

/// Divide, substituting 0 when the denominator is not positive.
pub(crate) fn guarded_div(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Expected clicks for a channel, dispatched by traffic kind.
pub fn clicks(traffic: &ChannelTraffic, budget: f64) -> f64 {
    match *traffic {
        ChannelTraffic::Cpc { cpc } => guarded_div(budget, cpc),
        ChannelTraffic::Seo { search_volume, organic_ctr } => search_volume * (organic_ctr / 100.0),
        ChannelTraffic::Email { recipients, open_rate, click_through_rate } => {
            recipients * (open_rate / 100.0) * (click_through_rate / 100.0)
        }
    }
}

/// Compute clicks, conversions, revenue and ROAS for one channel.
///
/// Never fails: negative inputs are computed literally and every division
/// by a zero budget or CPC yields 0.
pub fn compute(input: &ChannelInput) -> ChannelResult {
    let clicks = clicks(&input.traffic, input.budget);
    let conversions = clicks * (input.conversion_rate / 100.0);
    let revenue = conversions * input.average_order_value;
    let roas = guarded_div(revenue, input.budget);

    ChannelResult { clicks, conversions, revenue, roas }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Marketing Mix & ROAS Engine - Multi-Channel Aggregation

use tracing::debug;

use crate::calculator::{compute, guarded_div};
use crate::types::{ChannelInput, ChannelRow, MixReport, MixTotals};

/// Each channel's share of the total budget, in percent and in input order.
///
/// All shares are 0 when the total budget is exactly 0. A negative total is
/// divided literally, like every other unvalidated engine input.
pub fn budget_shares(budgets: &[f64]) -> Vec<f64> {
    let total: f64 = budgets.iter().sum();
    if total == 0.0 {
        return vec![0.0; budgets.len()];
    }
    budgets.iter().map(|b| b / total * 100.0).collect()
}

/// Run the calculator once per channel and assemble the ordered report.
pub fn compute_mix(channels: &[ChannelInput]) -> MixReport {
    let budgets: Vec<f64> = channels.iter().map(|c| c.budget).collect();
    let shares = budget_shares(&budgets);

    let rows: Vec<ChannelRow> = channels
        .iter()
        .zip(shares)
        .map(|(channel, budget_share)| {
            let result = compute(channel);
            debug!(
                channel = %channel.name,
                kind = channel.kind().label(),
                clicks = result.clicks,
                revenue = result.revenue,
                roas = result.roas,
                "computed channel"
            );
            ChannelRow {
                name: channel.name.clone(),
                kind: channel.kind(),
                budget: channel.budget,
                result,
                budget_share,
            }
        })
        .collect();

    let totals = totals(&rows);
    debug!(channels = rows.len(), total_budget = totals.budget, blended_roas = totals.roas, "computed mix");

    MixReport { rows, totals }
}

fn totals(rows: &[ChannelRow]) -> MixTotals {
    let mut totals = rows.iter().fold(MixTotals::default(), |mut acc, row| {
        acc.budget += row.budget;
        acc.clicks += row.result.clicks;
        acc.conversions += row.result.conversions;
        acc.revenue += row.result.revenue;
        acc
    });
    totals.roas = guarded_div(totals.revenue, totals.budget);
    totals
}
